//! Error types for the extraction and reporting pipeline.
//!
//! Responsibilities:
//! - Classify input failures (extension, missing file, malformed JSON, other I/O).
//! - Classify output failures, separating permission problems from other write errors.
//! - Classify guard failures (reading the operator's answer, archiving the old file).
//!
//! Does NOT handle:
//! - Empty widget lists (reported as `FileOutcome::Empty`, not an error).
//! - Declined overwrites (reported as `Decision::Abort`, not an error).
//! - Exit code mapping (see the CLI crate).

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to turn an input path into a parsed document.
#[derive(Error, Debug)]
pub enum InputError {
    /// The path does not carry the `.json` suffix.
    #[error("The file must have a .json extension: {path}")]
    NotJsonExtension { path: PathBuf },

    /// The path does not exist.
    #[error("The specified JSON file was not found: {path}")]
    NotFound { path: PathBuf },

    /// The file was read but is not valid JSON.
    #[error("Failed to decode JSON file {path}: {detail}")]
    ParseFailure { path: PathBuf, detail: String },

    /// Any other I/O failure while reading.
    #[error("An unexpected error occurred while reading {path}: {detail}")]
    Unexpected { path: PathBuf, detail: String },
}

impl InputError {
    /// The input path the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotJsonExtension { path }
            | Self::NotFound { path }
            | Self::ParseFailure { path, .. }
            | Self::Unexpected { path, .. } => path,
        }
    }
}

/// Failure to open or append to a CSV/Markdown target.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The target could not be opened or written due to permissions.
    #[error("Permission denied to write to {path}. Please check the file permissions.")]
    PermissionDenied { path: PathBuf },

    /// Any other write failure.
    #[error("An error occurred while writing to {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OutputError {
    /// Classify an I/O error raised while writing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::WriteFailure {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Classify a `csv` crate error raised while writing `path`.
    pub fn from_csv(path: &Path, err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::from_io(path, source),
            other => Self::WriteFailure {
                path: path.to_path_buf(),
                source: io::Error::other(format!("{other:?}")),
            },
        }
    }
}

/// Failure inside the existing-file guard.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The operator's answer could not be read.
    #[error("Failed to read overwrite confirmation for {path}: {source}")]
    Prompt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The existing file could not be renamed out of the way.
    #[error("Failed to rename {path} to {archive}: {source}")]
    Archive {
        path: PathBuf,
        archive: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any terminal pipeline failure.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Guard(#[from] GuardError),

    /// Some inputs were skipped under the keep-going policy.
    #[error("{failed} of {total} input file(s) could not be processed")]
    SkippedInputs { failed: usize, total: usize },
}
