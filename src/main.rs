//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `validate_http_headers` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Usage help and the process exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::error;
use std::process;

use validate_http_headers::config::{Opt, DEFAULT_SPEC_FILE};
use validate_http_headers::initialization::init_logger_with;
use validate_http_headers::{run, Config, ErrorCode, RunOutcome};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let opt = Opt::parse();

    // Without a logger the report is lost but the exit status still holds
    if let Err(e) = init_logger_with(opt.log_level.clone().into(), opt.log_format.clone()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from(opt);
    let outcome = match run(&config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Failed to start validation: {}", e);
            let code = e.error_code().unwrap_or(ErrorCode::InvalidRequest);
            process::exit(code.exit_code());
        }
    };

    if outcome == RunOutcome::Usage {
        println!("No spec file given and {} not found.\n", DEFAULT_SPEC_FILE);
        Opt::command()
            .print_help()
            .context("Failed to print usage")?;
        println!();
    }

    process::exit(outcome.exit_code());
}
