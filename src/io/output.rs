use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error type for writing the generated page
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Replace the page at `path` with `html`
pub fn write_page(path: &Path, html: &str) -> Result<(), OutputError> {
    atomic_write(path, html.as_bytes()).map_err(|e| OutputError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
