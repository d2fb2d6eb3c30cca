//! External system integrations.
//!
//! - [`source`] - The [`MetadataSource`](source::MetadataSource) trait
//! - [`sqlite`] - SQLite implementation backed by sqlx
//!
//! # Design Pattern
//!
//! The exporter talks to its source through a trait so that the pipeline can
//! be exercised with in-memory sources in tests.
//!
//! ```rust,no_run
//! use hanrei_export::adapters::source::MetadataSource;
//! use hanrei_export::adapters::sqlite::SqliteSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut source = SqliteSource::open("../data/hanrei.db", "hanrei_metadata").await?;
//! source.verify_schema().await?;
//! let rows = source.fetch_ordered().await?;
//! source.close().await?;
//! println!("{} rows", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod source;
pub mod sqlite;
