//! Markdown sink.
//!
//! A report document appended to across the run: the title and preamble once per
//! file lifetime, then one `##` section per input file and one `###` block per
//! widget with its query in a fenced `sql` block.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use pulse_config::constants::{
    MARKDOWN_FILE_NOTE, MARKDOWN_PREAMBLE, MARKDOWN_TITLE, QUERY_FENCE_LANG,
};
use tracing::{debug, info};

use super::{RenderSummary, Sink, SinkKind, open_append};
use crate::error::OutputError;
use crate::models::{FileBatch, WidgetRecord};

/// Document-level title and preamble.
pub fn render_document_header() -> String {
    format!("# {MARKDOWN_TITLE}\n\n{MARKDOWN_PREAMBLE}\n\n")
}

/// One input file's section: heading, note, then every widget block.
pub fn render_file_section(batch: &FileBatch) -> String {
    let mut out = format!("## JSON File: {}\n\n{MARKDOWN_FILE_NOTE}\n\n", batch.source_file);
    for record in &batch.records {
        out.push_str(&render_widget(record));
    }
    out
}

fn render_widget(record: &WidgetRecord) -> String {
    let fence = fence_for(&record.query);
    format!(
        "### Widget Number: {} - {}\n\n**Dashboard**: {}\n\n**Query**:\n\n{fence}{QUERY_FENCE_LANG}\n{}\n{fence}\n\n",
        record.sequence, record.name, record.dashboard, record.query
    )
}

/// A backtick fence longer than any backtick run inside `body`, at least three long.
fn fence_for(body: &str) -> String {
    let longest = body
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

/// Appends report sections to a Markdown file, opened on the first `render`.
pub struct MarkdownSink {
    path: PathBuf,
    file: Option<File>,
    header_pending: bool,
}

impl MarkdownSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            file: None,
            header_pending: false,
        }
    }

    /// Open the target for appending. The title is owed only if the file is new or empty.
    fn open_file(&mut self) -> Result<File, OutputError> {
        let target = open_append(&self.path)?;
        debug!(path = %self.path.display(), header_pending = target.header_pending, "Markdown target opened");
        self.header_pending = target.header_pending;
        Ok(target.file)
    }
}

impl Sink for MarkdownSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Markdown
    }

    fn render(&mut self, batch: &FileBatch) -> Result<RenderSummary, OutputError> {
        let file = match self.file.take() {
            Some(file) => file,
            None => self.open_file()?,
        };
        let file = self.file.insert(file);

        let mut chunk = String::new();
        if self.header_pending {
            chunk.push_str(&render_document_header());
        }
        chunk.push_str(&render_file_section(batch));

        file.write_all(chunk.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| OutputError::from_io(&self.path, e))?;
        self.header_pending = false;

        info!(path = %self.path.display(), widgets = batch.len(), "Results appended to Markdown");

        Ok(RenderSummary {
            kind: SinkKind::Markdown,
            target: Some(self.path.clone()),
            records: batch.len(),
        })
    }
}
