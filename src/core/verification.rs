//! Output verification with SHA-256 checksums
//!
//! After the document is moved into place it is read back and hashed. The
//! checksum goes into the export summary, which makes repeated runs over an
//! unchanged database easy to compare.

use crate::domain::{ExportError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Calculate SHA-256 checksum of raw bytes
///
/// Returns a hex-encoded SHA-256 checksum string (64 characters).
///
/// # Examples
///
/// ```
/// use hanrei_export::core::verification::calculate_checksum_bytes;
///
/// let checksum = calculate_checksum_bytes(b"[]");
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Read `path` back and check it against `expected`
///
/// Returns the checksum of the file on disk.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if the file cannot be read or its contents
/// differ from what was written.
pub fn verify_written(path: &Path, expected: &[u8]) -> Result<String> {
    let on_disk = fs::read(path).map_err(|e| {
        ExportError::Write(format!(
            "Failed to read back output {}: {}",
            path.display(),
            e
        ))
    })?;

    let expected_checksum = calculate_checksum_bytes(expected);
    let actual_checksum = calculate_checksum_bytes(&on_disk);

    if actual_checksum != expected_checksum {
        tracing::error!(
            output = %path.display(),
            expected = %expected_checksum,
            actual = %actual_checksum,
            "Output checksum mismatch"
        );
        return Err(ExportError::Write(format!(
            "Output {} does not match the rendered document",
            path.display()
        )));
    }

    Ok(actual_checksum)
}
