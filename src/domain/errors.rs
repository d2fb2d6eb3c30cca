//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Driver and
//! filesystem errors are converted into these variants at the adapter
//! boundary, so no third-party error type leaks into the public API.

use thiserror::Error;

/// Main exporter error type
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The source database could not be opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// The metadata table or one of its columns is missing
    #[error("Schema error: {0}")]
    Schema(String),

    /// Reading or decoding rows failed after the schema was verified
    #[error("Query error: {0}")]
    Query(String),

    /// The output document could not be written
    #[error("Write error: {0}")]
    Write(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ExportError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::Configuration(_) => 2,
            _ => 1,
        }
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("Failed to parse TOML: {err}"))
    }
}
