//! Run dispatch logic.
//!
//! Responsibilities:
//! - Guard every active output file before any input is read.
//! - Choose the sinks for the run and drive the pipeline over all inputs.
//! - Tell the operator what happened to each file.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading or logging setup (see `main()`).
//!
//! Invariants:
//! - Each active file sink is guarded exactly once, CSV first, then Markdown.
//! - A declined overwrite stops the run before anything is written, and is not an error.
//! - The console sink is used only when no file sink is configured.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::Result;
use crossterm::style::Stylize;
use pulse_config::Config;
use pulse_core::{
    Confirm, ConsoleSink, CsvSink, Decision, ExistingFileGuard, FailurePolicy, FileOutcome,
    FileReport, MarkdownSink, Pipeline, RunSummary, Sink, SinkKind,
};
use tracing::info;

/// How a run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    Completed(RunSummary),
    /// The operator declined to replace this kind of output.
    Declined(SinkKind),
}

/// Run the whole extraction for `config`, writing operator messages to `out`.
pub(crate) fn run<C: Confirm, W: Write>(
    config: &Config,
    confirm: C,
    out: &mut W,
) -> Result<RunOutcome> {
    let mut guard = ExistingFileGuard::new(confirm);
    let targets = [
        (SinkKind::Csv, config.outputs.csv.as_deref()),
        (SinkKind::Markdown, config.outputs.markdown.as_deref()),
    ];

    for (kind, path) in targets {
        let Some(path) = path else { continue };
        match guard.check(path)? {
            Decision::Abort => {
                writeln!(out, "Exiting without writing to {} file.", kind.label())?;
                return Ok(RunOutcome::Declined(kind));
            }
            Decision::Proceed {
                archived: Some(archive),
            } => {
                writeln!(
                    out,
                    "The existing file has been renamed to {}",
                    archive.display()
                )?;
            }
            Decision::Proceed { archived: None } => {}
        }
    }

    let sinks = build_sinks(config);
    let policy = if config.keep_going {
        FailurePolicy::SkipFile
    } else {
        FailurePolicy::Abort
    };
    let color_errors = config.color && io::stderr().is_terminal();

    let mut pipeline = Pipeline::new(sinks, policy);
    let mut write_result = Ok(());
    let summary = pipeline.run(&config.inputs, |report| {
        if write_result.is_ok() {
            write_result = report_file(report, &mut *out, color_errors);
        }
    })?;
    write_result?;

    if config.is_multi_file() {
        writeln!(
            out,
            "Processed {} file(s): {} rendered, {} without queries, {} skipped, {} widget(s) in total.",
            summary.total, summary.rendered, summary.empty, summary.skipped, summary.records
        )?;
    }

    info!(records = summary.records, "Run complete");
    Ok(RunOutcome::Completed(summary.into_result()?))
}

fn build_sinks(config: &Config) -> Vec<Box<dyn Sink>> {
    let mut sinks: Vec<Box<dyn Sink>> = Vec::new();

    if let Some(path) = &config.outputs.csv {
        sinks.push(Box::new(CsvSink::new(path, config.is_multi_file())));
    }
    if let Some(path) = &config.outputs.markdown {
        sinks.push(Box::new(MarkdownSink::new(path)));
    }
    if sinks.is_empty() {
        let color = config.color && io::stdout().is_terminal();
        sinks.push(Box::new(ConsoleSink::stdout(color)));
    }

    sinks
}

fn report_file<W: Write>(report: &FileReport, out: &mut W, color_errors: bool) -> io::Result<()> {
    match &report.outcome {
        FileOutcome::Rendered(summaries) => {
            for summary in summaries {
                if let Some(target) = &summary.target {
                    writeln!(out, "Results have been appended to {}", target.display())?;
                    writeln!(out, "Total lines written: {}", summary.records)?;
                }
            }
        }
        FileOutcome::Empty => {
            writeln!(out, "No queries found in {}.", display_name(&report.path))?;
        }
        FileOutcome::Skipped(e) => {
            let message = format!("Skipping {}: {e}", display_name(&report.path));
            if color_errors {
                eprintln!("{}", message.red());
            } else {
                eprintln!("{message}");
            }
        }
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}
