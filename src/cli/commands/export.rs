//! Export command implementation
//!
//! This module implements the `export` command, which is also what runs
//! when no subcommand is given.

use crate::config::HanreiConfig;
use crate::core::export::{ExportConfig, Exporter};
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Override the source database path
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Override the output document path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Override the metadata table name
    #[arg(long)]
    pub table: Option<String>,
}

impl ExportArgs {
    /// Apply CLI overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut HanreiConfig) {
        if let Some(source) = &self.source {
            tracing::info!(source = %source.display(), "Overriding source path from CLI");
            config.source.path = source.clone();
        }
        if let Some(output) = &self.output {
            tracing::info!(output = %output.display(), "Overriding output path from CLI");
            config.output.path = output.clone();
        }
        if let Some(table) = &self.table {
            tracing::info!(table = %table, "Overriding table from CLI");
            config.source.table = table.clone();
        }
    }

    /// Execute the export command
    pub async fn execute(&self, mut config: HanreiConfig) -> anyhow::Result<i32> {
        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let exporter = Exporter::new(ExportConfig::from(&config));
        let summary = match exporter.run().await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(e.exit_code());
            }
        };

        for line in summary.report_lines() {
            println!("{line}");
        }

        Ok(0)
    }
}
