//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Records** ([`MetadataRecord`] as stored, [`ExportRecord`] as emitted)
//! - **Error type** ([`ExportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExportError>`]:
//!
//! ```rust,no_run
//! use hanrei_export::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = hanrei_export::config::load_config("hanrei-export.toml")?;
//!     println!("{}", config.source.path.display());
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::ExportError;
pub use record::{ExportRecord, MetadataRecord, OUTPUT_KEYS, SOURCE_COLUMNS};
pub use result::Result;
