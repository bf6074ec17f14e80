//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Command-line parsing (the CLI calls the `with_*` methods).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called after `from_env()`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Component, Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER, ENV_DOTENV_DISABLED};
use crate::types::{Config, LoggingConfig, OutputTargets};

/// Configuration loader that builds config from environment variables and CLI values.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    inputs: Vec<PathBuf>,
    csv_output: Option<PathBuf>,
    markdown_output: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_file_disabled: Option<bool>,
    log_filter: Option<String>,
    keep_going: Option<bool>,
    color: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply `PULSE_*` and `NO_COLOR` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the input documents, replacing any previously set.
    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Set the CSV output path.
    pub fn with_csv_output(mut self, path: PathBuf) -> Self {
        self.csv_output = Some(path);
        self
    }

    /// Set the Markdown output path.
    pub fn with_markdown_output(mut self, path: PathBuf) -> Self {
        self.markdown_output = Some(path);
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    /// Disable the persistent log file.
    pub fn without_log_file(mut self) -> Self {
        self.log_file_disabled = Some(true);
        self
    }

    /// Set the log filter directive.
    pub fn with_log_filter(mut self, filter: String) -> Self {
        self.log_filter = Some(filter);
        self
    }

    /// Skip unreadable inputs instead of aborting.
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = Some(keep_going);
        self
    }

    /// Enable or disable console colors.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    pub(crate) fn set_log_file(&mut self, path: Option<PathBuf>) {
        self.log_file = path;
    }

    pub(crate) fn set_log_filter(&mut self, filter: Option<String>) {
        self.log_filter = filter;
    }

    pub(crate) fn set_log_file_disabled(&mut self, disabled: Option<bool>) {
        self.log_file_disabled = disabled;
    }

    pub(crate) fn set_keep_going(&mut self, keep_going: Option<bool>) {
        self.keep_going = keep_going;
    }

    pub(crate) fn set_color(&mut self, color: Option<bool>) {
        self.color = color;
    }

    /// Validate the accumulated values and build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.inputs.is_empty() {
            return Err(ConfigError::NoInputs);
        }

        if let (Some(csv), Some(markdown)) = (&self.csv_output, &self.markdown_output)
            && same_target(csv, markdown)
        {
            return Err(ConfigError::ConflictingOutputs { path: csv.clone() });
        }

        let filter = self
            .log_filter
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        if filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }

        let file = if self.log_file_disabled.unwrap_or(false) {
            None
        } else {
            Some(
                self.log_file
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            )
        };

        Ok(Config {
            inputs: self.inputs,
            outputs: OutputTargets {
                csv: self.csv_output,
                markdown: self.markdown_output,
            },
            logging: LoggingConfig { file, filter },
            keep_going: self.keep_going.unwrap_or(false),
            color: self.color.unwrap_or(true),
        })
    }
}

/// True when both output paths name the same file.
///
/// `.` components are ignored, and an existing parent directory is resolved, so
/// `out.csv`, `./out.csv` and `$PWD/out.csv` all compare equal.
fn same_target(a: &Path, b: &Path) -> bool {
    a == b || output_identity(a) == output_identity(b)
}

fn output_identity(path: &Path) -> PathBuf {
    let lexical: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let parent = match lexical.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    match (std::fs::canonicalize(&parent), lexical.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => lexical,
    }
}
