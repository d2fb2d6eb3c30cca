//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HanreiConfig;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "hanrei-export.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into [`HanreiConfig`]
/// 4. Applies environment variable overrides (HANREI_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`ExportError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, the TOML is malformed, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use hanrei_export::config::loader::load_config;
///
/// let config = load_config("hanrei-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HanreiConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: HanreiConfig = toml::from_str(&contents)?;

    finish(config)
}

/// Loads configuration, falling back to built-in defaults when `path` does
/// not exist.
///
/// Used for the implicit default config file so that running the tool with
/// no arguments and no config file still exports with the standard layout.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<HanreiConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        config_path = %path.display(),
        "Configuration file not found, using defaults"
    );
    finish(HanreiConfig::default())
}

fn finish(mut config: HanreiConfig) -> Result<HanreiConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are passed through untouched. All missing variables are
/// reported in one error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using HANREI_* prefix
///
/// Environment variables follow the pattern: HANREI_<SECTION>_<KEY>
fn apply_env_overrides(config: &mut HanreiConfig) -> Result<()> {
    // Source overrides
    if let Ok(val) = std::env::var("HANREI_SOURCE_PATH") {
        config.source.path = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("HANREI_SOURCE_TABLE") {
        config.source.table = val;
    }

    // Output overrides
    if let Ok(val) = std::env::var("HANREI_OUTPUT_PATH") {
        config.output.path = PathBuf::from(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("HANREI_LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("HANREI_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            ExportError::Configuration(format!(
                "HANREI_LOGGING_LOCAL_ENABLED must be 'true' or 'false', got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("HANREI_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
