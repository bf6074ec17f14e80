//! Dashboard export query extraction.
//!
//! This crate reads QRadar Pulse dashboard exports, recovers the dashboard name
//! and every widget's query, and renders them to the console, a semicolon CSV, or
//! a Markdown report. Pre-existing CSV/Markdown targets are guarded and archived,
//! never deleted.
//!
//! The stages are plain functions (`loader::load`, `extract::extract`,
//! `normalize::normalize`) composed by `pipeline::Pipeline` over a set of
//! `sink::Sink`s. The crate only emits `tracing` events; installing a subscriber
//! is the binary's job.

pub mod error;
pub mod extract;
pub mod guard;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod pipeline;
mod serde_helpers;
pub mod sink;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use error::{Error, GuardError, InputError, OutputError, Result};
pub use extract::{Extraction, extract};
pub use guard::{Confirm, Decision, ExistingFileGuard, is_affirmative};
pub use loader::load;
pub use models::{FileBatch, RawDocument, WidgetRecord};
pub use normalize::{normalize, single_line};
pub use pipeline::{FailurePolicy, FileOutcome, FileReport, Pipeline, RunSummary};
pub use sink::{ConsoleSink, CsvSink, MarkdownSink, RenderSummary, Sink, SinkKind};
