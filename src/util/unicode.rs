use unicode_segmentation::UnicodeSegmentation;

/// The first `max` grapheme clusters of `s`, with no ellipsis.
///
/// Cuts on cluster boundaries so combining marks and emoji sequences are
/// never split.
pub fn truncate_graphemes(s: &str, max: usize) -> &str {
    match s.grapheme_indices(true).nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
