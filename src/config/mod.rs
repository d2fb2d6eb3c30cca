//! Configuration management.
//!
//! Configuration is optional. Without a file the exporter reads
//! `../data/hanrei.db` and writes `data/metadata.json`, relative to the
//! working directory. A TOML file, `HANREI_*` environment variables and CLI
//! flags can each override those paths, in that order of precedence.
//!
//! # Example Configuration
//!
//! ```toml
//! [source]
//! path = "${HANREI_DATA_DIR}/hanrei.db"
//! table = "hanrei_metadata"
//!
//! [output]
//! path = "site/data/metadata.json"
//!
//! [logging]
//! level = "info"
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hanrei_export::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("hanrei-export.toml")?;
//! println!("Source: {}", config.source.path.display());
//! println!("Output: {}", config.output.path.display());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{HanreiConfig, LoggingConfig, OutputConfig, SourceConfig};
