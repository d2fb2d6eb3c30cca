//! Configuration schema types
//!
//! Every section is optional in the TOML file; missing sections and keys fall
//! back to the layout the exporter has always used (`../data/hanrei.db` in,
//! `data/metadata.json` out).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the source database
pub const DEFAULT_SOURCE_PATH: &str = "../data/hanrei.db";

/// Default metadata table name
pub const DEFAULT_TABLE: &str = "hanrei_metadata";

/// Default location of the exported document
pub const DEFAULT_OUTPUT_PATH: &str = "data/metadata.json";

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HanreiConfig {
    /// Source database settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Output document settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HanreiConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.source.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Source database configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_source_path")]
    pub path: PathBuf,

    /// Name of the metadata table
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
            table: default_table(),
        }
    }
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("source.path cannot be empty".to_string());
        }

        // The table name is interpolated into SQL, so only plain identifiers pass
        let re = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .map_err(|e| format!("Invalid identifier pattern: {e}"))?;
        if !re.is_match(&self.table) {
            return Err(format!(
                "Invalid source.table '{}'. Must be a plain SQL identifier",
                self.table
            ));
        }
        Ok(())
    }
}

/// Output document configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON document to write
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("output.path cannot be empty".to_string());
        }
        if self.path.file_name().is_none() {
            return Err(format!(
                "output.path '{}' must name a file",
                self.path.display()
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_PATH)
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults_match_legacy_layout() {
        let config = HanreiConfig::default();
        assert_eq!(config.source.path, PathBuf::from("../data/hanrei.db"));
        assert_eq!(config.source.table, "hanrei_metadata");
        assert_eq!(config.output.path, PathBuf::from("data/metadata.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: HanreiConfig = toml::from_str("").unwrap();
        assert_eq!(config, HanreiConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: HanreiConfig = toml::from_str("[source]\npath = \"cases.db\"\n").unwrap();
        assert_eq!(config.source.path, PathBuf::from("cases.db"));
        assert_eq!(config.source.table, DEFAULT_TABLE);
    }

    #[test_case("hanrei_metadata", true ; "plain")]
    #[test_case("_cases2", true ; "leading underscore")]
    #[test_case("2cases", false ; "leading digit")]
    #[test_case("cases; DROP TABLE x", false ; "injection")]
    #[test_case("", false ; "empty")]
    fn test_table_identifier_validation(table: &str, valid: bool) {
        let source = SourceConfig {
            table: table.to_string(),
            ..Default::default()
        };
        assert_eq!(source.validate().is_ok(), valid);
    }

    #[test]
    fn test_output_path_must_name_file() {
        let output = OutputConfig {
            path: PathBuf::from(".."),
        };
        assert!(output.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let logging = LoggingConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        let err = logging.validate().unwrap_err();
        assert!(err.contains("logging.level"));
    }

    #[test]
    fn test_invalid_rotation() {
        let logging = LoggingConfig {
            local_rotation: "weekly".to_string(),
            ..Default::default()
        };
        assert!(logging.validate().is_err());
    }
}
