//! Atomic output of rendered documents.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Replace `path` with `contents` in one step.
///
/// The data is written to a temporary file next to `path` and renamed over it
/// only once fully flushed. If anything fails the temporary file is removed
/// when dropped and the previous content of `path` is left untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    debug!(tmp = ?tmp.path(), target = ?path, "persisting document");
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
