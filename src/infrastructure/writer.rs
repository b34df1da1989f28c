//! Atomic file writer
//!
//! Generated files are written to a temp file in the destination directory
//! and then renamed over the target, so readers never see a partial file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::GiaResult;

/// Write content to a file atomically, creating parent directories
pub fn atomic_write(path: &Path, content: &[u8]) -> GiaResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Read a file if it exists; `None` when it does not
pub fn read_existing(path: &Path) -> GiaResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
