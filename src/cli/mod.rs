//! CLI interface and argument parsing
//!
//! Running the binary without a subcommand performs an export with the
//! configured (or default) paths.

pub mod commands;

use crate::config::{load_config, load_config_or_default, HanreiConfig, DEFAULT_CONFIG_PATH};
use crate::domain::Result;
use clap::{Parser, Subcommand};

/// hanrei-export - Case-law metadata to JSON exporter
#[derive(Parser, Debug)]
#[command(name = "hanrei-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: hanrei-export.toml, optional)
    #[arg(short, long, env = "HANREI_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HANREI_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute (default: export)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the metadata table to JSON
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Load the configuration this invocation points at
    pub fn load_config(&self) -> Result<HanreiConfig> {
        resolve_config(self.config.as_deref())
    }
}

/// Load an explicitly named config file, or the optional default one
///
/// An explicit path must exist. The default path may be absent, in which
/// case built-in defaults apply.
pub fn resolve_config(path: Option<&str>) -> Result<HanreiConfig> {
    match path {
        Some(path) => load_config(path),
        None => load_config_or_default(DEFAULT_CONFIG_PATH),
    }
}
