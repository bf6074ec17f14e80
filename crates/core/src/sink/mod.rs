//! Output sinks.
//!
//! Responsibilities:
//! - Define the `Sink` trait every renderer implements.
//! - Provide the append-mode target opening shared by the CSV and Markdown sinks.
//!
//! Does NOT handle:
//! - Guarding pre-existing files (see `guard`); sinks are built after the guard ran.
//! - Choosing which sinks are active (the CLI dispatch decides once per run).
//!
//! Invariants:
//! - File sinks open their target on the first `render`, in append mode, and keep
//!   it for the run. A run that renders nothing never creates the file.
//! - A file sink writes its header only if the target was empty when opened.
//! - Every `render` call flushes before returning, so a later failure never loses
//!   an earlier file's rows.

mod console;
mod csv;
mod markdown;

pub use self::console::{ConsoleSink, format_batch};
pub use self::csv::{CsvSink, csv_header};
pub use self::markdown::{MarkdownSink, render_document_header, render_file_section};

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::models::FileBatch;

/// Which renderer produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    Csv,
    Markdown,
}

impl SinkKind {
    /// Short label used in operator messages.
    pub fn label(self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::Csv => "CSV",
            SinkKind::Markdown => "Markdown",
        }
    }
}

/// What one `render` call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub kind: SinkKind,
    /// File written, `None` for the console.
    pub target: Option<PathBuf>,
    /// Widget records written.
    pub records: usize,
}

/// A rendering target for batches of canonical records.
pub trait Sink {
    fn kind(&self) -> SinkKind;

    /// Render one input file's batch.
    fn render(&mut self, batch: &FileBatch) -> Result<RenderSummary, OutputError>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn kind(&self) -> SinkKind {
        (**self).kind()
    }

    fn render(&mut self, batch: &FileBatch) -> Result<RenderSummary, OutputError> {
        (**self).render(batch)
    }
}

/// An output file opened for appending.
pub(crate) struct AppendTarget {
    pub file: File,
    /// True when the file was empty at open time, so the header is still owed.
    pub header_pending: bool,
}

/// Open `path` for appending, creating it and its parent directories if needed.
pub(crate) fn open_append(path: &Path) -> Result<AppendTarget, OutputError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::from_io(path, e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| OutputError::from_io(path, e))?;

    let len = file
        .metadata()
        .map_err(|e| OutputError::from_io(path, e))?
        .len();

    Ok(AppendTarget {
        file,
        header_pending: len == 0,
    })
}
