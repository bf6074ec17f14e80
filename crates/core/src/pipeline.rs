//! Extraction pipeline.
//!
//! Responsibilities:
//! - Drive Loader, Extractor, Normalizer, then every active sink, one input at a time.
//! - Report a `FileReport` per input through a caller-supplied observer.
//! - Apply the failure policy to input errors.
//!
//! Does NOT handle:
//! - Guarding or opening output files (sinks arrive ready to write).
//! - Printing anything; the observer decides what the operator sees.
//!
//! Invariants:
//! - Inputs are processed strictly in the order given.
//! - An empty widget list is never an error and never reaches a sink.
//! - Output errors always abort the run, whatever the policy.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, InputError, Result};
use crate::extract::extract;
use crate::loader::load;
use crate::normalize::normalize;
use crate::sink::{RenderSummary, Sink};

/// What to do when an input file cannot be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the run at the first input error.
    #[default]
    Abort,
    /// Log and report the input, then continue with the next one.
    SkipFile,
}

/// Result of processing one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Records were rendered by every sink.
    Rendered(Vec<RenderSummary>),
    /// The document had no widgets; nothing was rendered.
    Empty,
    /// The input failed and was skipped under `FailurePolicy::SkipFile`.
    Skipped(InputError),
}

/// Per-input report handed to the observer.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// Dashboard name, when the document could be loaded.
    pub dashboard: Option<String>,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Records rendered for this input (0 when empty or skipped).
    pub fn records(&self) -> usize {
        match &self.outcome {
            FileOutcome::Rendered(summaries) => {
                summaries.iter().map(|s| s.records).max().unwrap_or(0)
            }
            FileOutcome::Empty | FileOutcome::Skipped(_) => 0,
        }
    }
}

/// Tally of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub rendered: usize,
    pub empty: usize,
    pub skipped: usize,
    pub records: usize,
}

impl RunSummary {
    fn record(&mut self, report: &FileReport) {
        self.total += 1;
        self.records += report.records();
        match report.outcome {
            FileOutcome::Rendered(_) => self.rendered += 1,
            FileOutcome::Empty => self.empty += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    /// Turn skipped inputs into `Error::SkippedInputs`.
    pub fn into_result(self) -> Result<Self> {
        if self.skipped > 0 {
            return Err(Error::SkippedInputs {
                failed: self.skipped,
                total: self.total,
            });
        }
        Ok(self)
    }
}

/// Base name used to label a file in reports and multi-file output.
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Sequential driver over a fixed set of sinks.
pub struct Pipeline {
    sinks: Vec<Box<dyn Sink>>,
    policy: FailurePolicy,
}

impl Pipeline {
    pub fn new(sinks: Vec<Box<dyn Sink>>, policy: FailurePolicy) -> Self {
        Self { sinks, policy }
    }

    /// Process one input file through every stage.
    pub fn process_file(&mut self, path: &Path) -> Result<FileReport> {
        let doc = match load(path) {
            Ok(doc) => doc,
            Err(e) if self.policy == FailurePolicy::SkipFile => {
                warn!(path = %path.display(), "Skipping input: {e}");
                return Ok(FileReport {
                    path: path.to_path_buf(),
                    dashboard: None,
                    outcome: FileOutcome::Skipped(e),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let batch = normalize(&source_label(path), extract(&doc));
        let dashboard = Some(batch.dashboard.clone());

        if batch.is_empty() {
            return Ok(FileReport {
                path: path.to_path_buf(),
                dashboard,
                outcome: FileOutcome::Empty,
            });
        }

        let mut summaries = Vec::with_capacity(self.sinks.len());
        for sink in &mut self.sinks {
            summaries.push(sink.render(&batch)?);
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            dashboard,
            outcome: FileOutcome::Rendered(summaries),
        })
    }

    /// Process every input in order, calling `observer` after each one.
    ///
    /// Skipped inputs are counted in the summary, not turned into an error; see
    /// `RunSummary::into_result`.
    pub fn run<P, F>(&mut self, paths: &[P], mut observer: F) -> Result<RunSummary>
    where
        P: AsRef<Path>,
        F: FnMut(&FileReport),
    {
        let mut summary = RunSummary::default();
        for path in paths {
            let report = self.process_file(path.as_ref())?;
            observer(&report);
            summary.record(&report);
        }

        info!(
            total = summary.total,
            rendered = summary.rendered,
            empty = summary.empty,
            skipped = summary.skipped,
            records = summary.records,
            "Run finished"
        );
        Ok(summary)
    }
}
