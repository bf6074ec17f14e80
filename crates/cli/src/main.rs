//! Pulse Query Viewer CLI - extract widget queries from QRadar Pulse dashboard exports.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables into a `Config`.
//! - Install logging, then run the extraction via `dispatch`.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Loading, extraction, or rendering (see `crates/core`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing and environment merging.
//! - Command-line flags override environment values.
//! - Invoked with no arguments, the help text goes to stderr and the exit code is 1.

mod args;
mod dispatch;
mod error;
mod interactive;
mod logging;

use std::io::{self, IsTerminal};

use anyhow::Context;
use args::Cli;
use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use dispatch::RunOutcome;
use error::{ExitCode, ExitCodeExt};
use interactive::StdinConfirm;
use pulse_config::ConfigLoader;
use tracing::{error, info};

fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    if std::env::args_os().len() <= 1 {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let config = match ConfigLoader::new()
        .from_env()
        .map(|loader| cli.apply(loader))
        .and_then(ConfigLoader::build)
        .context("Invalid configuration")
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("{:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
    info!(inputs = config.inputs.len(), "Application initialized");

    let exit_code = match dispatch::run(&config, StdinConfirm, &mut io::stdout()) {
        Ok(RunOutcome::Completed(summary)) => {
            info!(
                files = summary.total,
                records = summary.records,
                "Exiting after successful run"
            );
            ExitCode::Success
        }
        Ok(RunOutcome::Declined(kind)) => {
            info!(output = kind.label(), "Exiting after declined overwrite");
            ExitCode::Success
        }
        Err(e) => {
            error!("{:#}", e);
            let message = format!("{:#}", e);
            if config.color && io::stderr().is_terminal() {
                eprintln!("{}", message.red());
            } else {
                eprintln!("{}", message);
            }
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
