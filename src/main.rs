// hanrei-export - Case-law metadata to JSON exporter
// Copyright (c) 2025 hanrei-export Contributors
// Licensed under the MIT License

use clap::Parser;
use hanrei_export::cli::commands::export::ExportArgs;
use hanrei_export::cli::{Cli, Commands};
use hanrei_export::config::HanreiConfig;
use hanrei_export::domain::Result;
use hanrei_export::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging needs the config, so load it first and fall back to defaults
    // if it is broken; the command reports the load error itself.
    let loaded = cli.load_config();
    let logging_config = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| logging_config.level.clone());

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "hanrei-export - case-law metadata exporter"
    );

    let exit_code = match execute_command(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    // process::exit skips destructors, flush file logs first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, loaded: Result<HanreiConfig>) -> anyhow::Result<i32> {
    match &cli.command {
        None => run_export(&ExportArgs::default(), loaded).await,
        Some(Commands::Export(args)) => run_export(args, loaded).await,
        Some(Commands::ValidateConfig(args)) => args.execute(cli.config.as_deref()).await,
        Some(Commands::Init(args)) => args.execute().await,
    }
}

async fn run_export(args: &ExportArgs, loaded: Result<HanreiConfig>) -> anyhow::Result<i32> {
    match loaded {
        Ok(config) => args.execute(config).await,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("{e}");
            Ok(e.exit_code())
        }
    }
}
