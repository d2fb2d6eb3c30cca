//! Core export logic.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration and summary
//! - [`transform`] - Row normalization
//! - [`output`] - Atomic JSON document writer
//! - [`verification`] - Read-back checksums
//!
//! # Export Workflow
//!
//! 1. **Open**: Connect to the SQLite database read-only
//! 2. **Probe**: Verify the metadata table and its 13 columns
//! 3. **Read**: Fetch every row, newest `saiban_nengappi` first
//! 4. **Close**: Release the source connection
//! 5. **Normalize**: Null to `""`, `zenbun_url` to `pdf_url`
//! 6. **Write**: Render pretty JSON and atomically replace the destination
//! 7. **Verify**: Read the document back and record its SHA-256
//!
//! # Example
//!
//! ```rust,no_run
//! use hanrei_export::core::export::{ExportConfig, Exporter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = Exporter::new(ExportConfig::new("../data/hanrei.db", "data/metadata.json"));
//! let summary = exporter.run().await?;
//! println!("Exported {} records", summary.record_count);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod output;
pub mod transform;
pub mod verification;
