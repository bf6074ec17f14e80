//! Console sink.
//!
//! One-shot per file: a dashboard header line followed by one block per widget.
//! Colors only help the eye; the text is identical with colors disabled.

use std::io::{self, Write};
use std::path::Path;

use crossterm::style::{Color, Stylize};

use super::{RenderSummary, Sink, SinkKind};
use crate::error::OutputError;
use crate::models::FileBatch;

/// Format a batch for the terminal.
pub fn format_batch(batch: &FileBatch, color: bool) -> String {
    let paint = |text: String, tint: Color| {
        if color {
            text.with(tint).to_string()
        } else {
            text
        }
    };

    let mut output = String::new();
    output.push('\n');
    output.push_str(&paint(
        format!("Dashboard: {}", batch.dashboard),
        Color::Yellow,
    ));
    output.push('\n');

    for record in &batch.records {
        output.push_str(&format!("\nWidget Number: {}\n", record.sequence));
        output.push_str(&paint(format!("    Name: {}", record.name), Color::Red));
        output.push('\n');
        output.push_str(&paint(format!("    Query: {}", record.query), Color::Green));
        output.push('\n');
    }

    output
}

/// Renders batches to a writer, stdout by default.
pub struct ConsoleSink<W: Write = io::Stdout> {
    out: W,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn render(&mut self, batch: &FileBatch) -> Result<RenderSummary, OutputError> {
        let stdout = Path::new("<stdout>");
        self.out
            .write_all(format_batch(batch, self.color).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| OutputError::from_io(stdout, e))?;

        Ok(RenderSummary {
            kind: SinkKind::Console,
            target: None,
            records: batch.len(),
        })
    }
}
