//! Existing-file guard.
//!
//! Responsibilities:
//! - Detect a pre-existing CSV/Markdown target before anything is written to it.
//! - Ask the operator, through an injected `Confirm`, whether to replace it.
//! - On confirmation, move the old file aside under a timestamped `.old` name.
//!
//! Does NOT handle:
//! - Opening or writing the new target (see `sink`).
//! - Terminating the process on decline; callers act on `Decision::Abort`.
//!
//! Invariants:
//! - Nothing is ever deleted; an archive never overwrites an earlier archive.
//! - The archive keeps the original bytes (a rename, not a copy).

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use pulse_config::constants::{ARCHIVE_TIMESTAMP_FORMAT, OLD_MARKER};
use tracing::{info, warn};

use crate::error::GuardError;

/// Source of the operator's answer to an overwrite prompt.
pub trait Confirm {
    /// Show `prompt` and return the raw answer line.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

impl<C: Confirm + ?Sized> Confirm for &mut C {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        (**self).ask(prompt)
    }
}

/// True only for `y`/`Y`, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Outcome of guarding one output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Safe to open the target; carries the archive path when an old file was moved.
    Proceed { archived: Option<PathBuf> },
    /// The operator declined; nothing was touched.
    Abort,
}

/// Prompt text shown for an existing target.
pub fn overwrite_prompt(path: &Path) -> String {
    format!(
        "The file {} already exists. Do you want to overwrite it? (y/n): ",
        path.display()
    )
}

/// Archive name for `path` at `timestamp`, before collision handling.
///
/// `out.csv` becomes `out_<timestamp>.old.csv`; `out` becomes `out_<timestamp>.old`.
pub fn archive_path(path: &Path, timestamp: &str) -> PathBuf {
    archive_candidate(path, timestamp, 0)
}

fn archive_candidate(path: &Path, timestamp: &str, attempt: usize) -> PathBuf {
    let mut name: OsString = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(format!("_{timestamp}"));
    if attempt > 0 {
        name.push(format!("_{attempt}"));
    }
    name.push(format!(".{OLD_MARKER}"));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// First archive name for `path` that is not already taken.
fn free_archive_path(path: &Path, timestamp: &str) -> PathBuf {
    let mut attempt = 0;
    loop {
        let candidate = archive_candidate(path, timestamp, attempt);
        if !candidate.exists() {
            return candidate;
        }
        warn!(archive = %candidate.display(), "Archive name taken, trying next suffix");
        attempt += 1;
    }
}

/// Guards output targets against silent replacement.
pub struct ExistingFileGuard<C> {
    confirm: C,
}

impl<C: Confirm> ExistingFileGuard<C> {
    pub fn new(confirm: C) -> Self {
        Self { confirm }
    }

    /// Guard `path` using the current local time for any archive name.
    pub fn check(&mut self, path: &Path) -> Result<Decision, GuardError> {
        self.check_at(path, Local::now())
    }

    /// Guard `path` using `now` for any archive name.
    pub fn check_at(&mut self, path: &Path, now: DateTime<Local>) -> Result<Decision, GuardError> {
        if !path.exists() {
            return Ok(Decision::Proceed { archived: None });
        }

        let answer = self
            .confirm
            .ask(&overwrite_prompt(path))
            .map_err(|source| GuardError::Prompt {
                path: path.to_path_buf(),
                source,
            })?;

        if !is_affirmative(&answer) {
            info!(path = %path.display(), "User chose not to overwrite the existing file");
            return Ok(Decision::Abort);
        }

        let timestamp = now.format(ARCHIVE_TIMESTAMP_FORMAT).to_string();
        let archive = free_archive_path(path, &timestamp);
        std::fs::rename(path, &archive).map_err(|source| GuardError::Archive {
            path: path.to_path_buf(),
            archive: archive.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            archive = %archive.display(),
            "Existing file renamed"
        );
        Ok(Decision::Proceed {
            archived: Some(archive),
        })
    }

    pub fn into_inner(self) -> C {
        self.confirm
    }
}
