//! CSV sink.
//!
//! Semicolon-delimited rows appended to one target for the whole run. Quoting is
//! left to the `csv` writer, which only quotes fields containing the delimiter,
//! a quote, or a line break.

use std::fs::File;
use std::path::{Path, PathBuf};

use pulse_config::constants::CSV_DELIMITER;
use tracing::{debug, info};

use super::{RenderSummary, Sink, SinkKind, open_append};
use crate::error::OutputError;
use crate::models::FileBatch;

/// Header columns, with the leading `File` column in multi-file mode.
pub fn csv_header(include_source: bool) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(5);
    if include_source {
        header.push("File");
    }
    header.extend(["Dashboard", "Number", "Name", "Query"]);
    header
}

/// Appends widget records to a CSV file.
///
/// The target is opened on the first `render`, so a run that fails before any
/// input loads leaves no file behind.
pub struct CsvSink {
    path: PathBuf,
    writer: Option<csv::Writer<File>>,
    include_source: bool,
    header_pending: bool,
}

impl CsvSink {
    pub fn new(path: &Path, include_source: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            writer: None,
            include_source,
            header_pending: false,
        }
    }

    /// Open the target for appending. The header is owed only if the file is new or empty.
    fn open_writer(&mut self) -> Result<csv::Writer<File>, OutputError> {
        let target = open_append(&self.path)?;
        debug!(path = %self.path.display(), header_pending = target.header_pending, "CSV target opened");
        self.header_pending = target.header_pending;

        Ok(csv::WriterBuilder::new()
            .delimiter(CSV_DELIMITER)
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(target.file))
    }
}

fn write_rows(
    writer: &mut csv::Writer<File>,
    batch: &FileBatch,
    include_source: bool,
    with_header: bool,
) -> Result<(), csv::Error> {
    if with_header {
        writer.write_record(csv_header(include_source))?;
    }

    for record in &batch.records {
        let number = record.sequence.to_string();
        let mut row: Vec<&str> = Vec::with_capacity(5);
        if include_source {
            row.push(&batch.source_file);
        }
        row.extend([
            record.dashboard.as_str(),
            number.as_str(),
            record.name.as_str(),
            record.query.as_str(),
        ]);
        writer.write_record(&row)?;
    }
    Ok(())
}

impl Sink for CsvSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Csv
    }

    fn render(&mut self, batch: &FileBatch) -> Result<RenderSummary, OutputError> {
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => self.open_writer()?,
        };
        let writer = self.writer.insert(writer);

        write_rows(writer, batch, self.include_source, self.header_pending)
            .map_err(|e| OutputError::from_csv(&self.path, e))?;
        self.header_pending = false;
        writer
            .flush()
            .map_err(|e| OutputError::from_io(&self.path, e))?;

        info!(path = %self.path.display(), rows = batch.len(), "Results appended to CSV");

        Ok(RenderSummary {
            kind: SinkKind::Csv,
            target: Some(self.path.clone()),
            records: batch.len(),
        })
    }
}
