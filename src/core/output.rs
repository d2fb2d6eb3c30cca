//! JSON document writer
//!
//! The document is rendered in memory, written to a temporary file next to
//! the destination and renamed over it. Readers of the destination see either
//! the previous document or the complete new one.

use crate::domain::{ExportError, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Render `value` the way the document has always been laid out
///
/// Two-space indentation, UTF-8 with non-ASCII characters left unescaped,
/// and no trailing newline. An empty array renders as `[]`.
pub fn render_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    serde_json::to_writer_pretty(&mut buffer, value)?;
    Ok(buffer)
}

/// Directory that will hold `destination`
fn parent_dir(destination: &Path) -> PathBuf {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Atomically replace `destination` with `contents`
///
/// Missing parent directories are created. If any step fails the temporary
/// file is removed and an existing destination is left untouched.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if the directory cannot be created or the
/// file cannot be written, synced or renamed.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> Result<()> {
    let dir = parent_dir(destination);

    fs::create_dir_all(&dir).map_err(|e| {
        ExportError::Write(format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut temp = NamedTempFile::new_in(&dir).map_err(|e| {
        ExportError::Write(format!(
            "Failed to create temporary file in {}: {}",
            dir.display(),
            e
        ))
    })?;

    temp.write_all(contents)
        .and_then(|_| temp.flush())
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| {
            ExportError::Write(format!(
                "Failed to write temporary file {}: {}",
                temp.path().display(),
                e
            ))
        })?;

    temp.persist(destination).map_err(|e| {
        ExportError::Write(format!(
            "Failed to move output into place at {}: {}",
            destination.display(),
            e.error
        ))
    })?;

    tracing::debug!(
        output = %destination.display(),
        bytes = contents.len(),
        "Output document written"
    );
    Ok(())
}
