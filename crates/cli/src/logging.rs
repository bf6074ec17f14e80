//! Logging setup for the CLI.
//!
//! Responsibilities:
//! - Install the process-wide `tracing` subscriber once, from `LoggingConfig`.
//!
//! Does NOT handle:
//! - Emitting events; the core crate logs through `tracing` macros.
//!
//! Invariants:
//! - The log file is opened in append mode and never truncated.
//! - File output carries no ANSI escape codes.
//! - Without a log file, only warnings and errors reach stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use pulse_config::{ConfigError, LoggingConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const STDERR_FILTER: &str = "warn";

/// Parse a filter directive, reporting bad ones as configuration errors.
fn parse_filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directive).map_err(|e| ConfigError::InvalidValue {
        var: "log level".to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber described by `config`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    match &config.file {
        Some(path) => {
            let filter = parse_filter(&config.filter)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_filter(filter),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_filter(EnvFilter::new(STDERR_FILTER)),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }
    Ok(())
}
