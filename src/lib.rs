// hanrei-export - Case-law metadata to JSON exporter
// Copyright (c) 2025 hanrei-export Contributors
// Licensed under the MIT License

//! # hanrei-export - Case-law metadata to JSON
//!
//! Reads the case metadata table from the SQLite case-law database and writes
//! it as one JSON array for the static search site.
//!
//! ## Overview
//!
//! - **Extracting** every row of `hanrei_metadata`, newest decision date first
//! - **Transforming** nulls to empty strings and `zenbun_url` to `pdf_url`
//! - **Loading** the records into `data/metadata.json` with an atomic replace
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export orchestration, normalization, output, verification
//! - [`adapters`] - SQLite source
//! - [`domain`] - Records and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hanrei_export::config::load_config_or_default;
//! use hanrei_export::core::export::{ExportConfig, Exporter};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default("hanrei-export.toml")?;
//!     let summary = Exporter::new(ExportConfig::from(&config)).run().await?;
//!
//!     println!("Exported {} records", summary.record_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Output Format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "jiken_shubetsu": "特許",
//!     "kenri_shubetsu": "",
//!     "jiken_shurui": "",
//!     "hatsumei_meisho": "",
//!     "jiken_bango": "",
//!     "bumei": "",
//!     "saiban_nengappi": "2023-01-01",
//!     "hanketsu_kekka": "",
//!     "genkoku": "",
//!     "hikoku": "",
//!     "soten": "",
//!     "pdf_url": ""
//!   }
//! ]
//! ```
//!
//! Ordering is by the stored text of `saiban_nengappi`, descending. Dates
//! that are not in a lexicographically sortable format will not come out
//! chronological.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

pub use crate::core::export::export;
