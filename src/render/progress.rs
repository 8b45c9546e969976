use std::fmt::Write;

/// Render `sections` progress boxes, the first `filled` of them filled.
///
/// Always emits exactly `sections` boxes; `filled` is clamped.
pub fn render_progress_bar(filled: u32, sections: u32) -> String {
    let mut html = String::new();
    for i in 1..=sections {
        let state = if i <= filled { "filled" } else { "empty" };
        let _ = writeln!(html, r#"<div class="progress-box {state}"></div>"#);
    }
    html
}
