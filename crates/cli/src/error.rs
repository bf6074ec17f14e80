//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map pipeline and configuration errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A declined overwrite is not an error and exits with `Success`.
//! - Exit codes 1-6 are reserved for specific error categories.

use pulse_config::ConfigError;
use pulse_core::{Error, GuardError, InputError, OutputError};

/// Structured exit codes for pulse-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success, including a declined overwrite.
    Success = 0,

    /// General error - prompt/archive failure, skipped inputs, or anything unclassified.
    GeneralError = 1,

    /// Invalid usage or configuration.
    InvalidUsage = 2,

    /// An input is not a `.json` file or is not valid JSON.
    InvalidInput = 3,

    /// An input file does not exist.
    NotFound = 4,

    /// An output file could not be written.
    WriteFailure = 5,

    /// An output file could not be written due to permissions.
    PermissionDenied = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&InputError> for ExitCode {
    fn from(err: &InputError) -> Self {
        match err {
            InputError::NotJsonExtension { .. } | InputError::ParseFailure { .. } => {
                ExitCode::InvalidInput
            }
            InputError::NotFound { .. } => ExitCode::NotFound,
            InputError::Unexpected { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&OutputError> for ExitCode {
    fn from(err: &OutputError) -> Self {
        match err {
            OutputError::PermissionDenied { .. } => ExitCode::PermissionDenied,
            OutputError::WriteFailure { .. } => ExitCode::WriteFailure,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Input(e) => Self::from(e),
            Error::Output(e) => Self::from(e),
            Error::Guard(_) | Error::SkippedInputs { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if nothing in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<Error>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<InputError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<OutputError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<GuardError>().is_some() {
                return ExitCode::GeneralError;
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::InvalidUsage;
            }
        }

        ExitCode::GeneralError
    }
}
