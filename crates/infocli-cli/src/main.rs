//! InfoCLI
//!
//! Command-line personal assistant for contacts and notes.

use std::fs::OpenOptions;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use infocli_core::{Config, Store};

mod cli;
mod commands;
mod output;
mod shell;

use cli::{Cli, Commands};
use commands::Context;
use output::{Output, OutputFormat};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    init_logging(&config);

    let ctx = Context {
        config: &config,
        config_path: cli.config.as_ref(),
        output: &output,
    };

    let mut store = Store::open_with_config(&config);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run(&mut store, &ctx),
        command => {
            let writes = command.is_write();
            debug!(?command, "Running command");
            commands::run(command, &mut store, &ctx)?;
            if writes {
                store.save()?;
            }
            Ok(())
        }
    }
}

/// Initialize file-based logging
///
/// Logs go to `config.log_file` or `{data_dir}/info-cli.log`, never to the
/// terminal. The level comes from INFOCLI_LOG (default: info).
fn init_logging(config: &Config) {
    let log_level = std::env::var("INFOCLI_LOG").unwrap_or_else(|_| "info".to_string());
    let log_path = config.log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!(
        "infocli_core={},infocli_cli={}",
        log_level, log_level
    ));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("Logging initialized to {:?}", log_path);
}
