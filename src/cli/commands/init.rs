//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your paths", self.output);
                println!("  2. Validate configuration: hanrei-export validate-config");
                println!("  3. Run export: hanrei-export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(1)
            }
        }
    }

    /// Generate the default configuration
    fn generate_config() -> &'static str {
        r#"# hanrei-export configuration
# Every key is optional; the values below are the defaults.
# Values may reference environment variables as ${VAR_NAME}.

[source]
# SQLite database holding the case metadata (opened read-only)
path = "../data/hanrei.db"
table = "hanrei_metadata"

[output]
# JSON document to overwrite on every run
path = "data/metadata.json"

[logging]
level = "info"            # trace | debug | info | warn | error
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly | never
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HanreiConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: HanreiConfig = toml::from_str(InitArgs::generate_config()).unwrap();
        assert_eq!(config, HanreiConfig::default());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hanrei-export.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hanrei-export.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[source]"));
    }
}
