//! Query normalizer.
//!
//! Turns raw widget entries into canonical `WidgetRecord`s: 1-based sequence
//! numbers, default names and queries, and single-line query text.

use pulse_config::constants::{DEFAULT_QUERY, DEFAULT_WIDGET_NAME};
use tracing::{debug, warn};

use crate::extract::Extraction;
use crate::models::{FileBatch, WidgetEntry, WidgetRecord};

/// Collapse every line break (`\r\n`, `\n`, lone `\r`) into a single space.
///
/// Idempotent: a single-line string is returned unchanged.
pub fn single_line(query: &str) -> String {
    if !query.contains(['\n', '\r']) {
        return query.to_string();
    }

    let mut out = String::with_capacity(query.len());
    let mut chars = query.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Build the canonical record for the entry at 1-based `sequence`.
pub fn normalize_entry(sequence: usize, dashboard: &str, entry: &WidgetEntry) -> WidgetRecord {
    WidgetRecord {
        sequence,
        dashboard: dashboard.to_string(),
        name: entry
            .name
            .clone()
            .unwrap_or_else(|| DEFAULT_WIDGET_NAME.to_string()),
        query: entry
            .query_text()
            .map(single_line)
            .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
    }
}

/// Normalize every entry of an extraction into a batch for `source_file`.
///
/// An empty widget list yields an empty batch and a warning; it is not an error.
pub fn normalize(source_file: &str, extraction: Extraction) -> FileBatch {
    let Extraction { dashboard, entries } = extraction;

    if entries.is_empty() {
        warn!(file = source_file, "No queries found in the JSON file.");
    }

    let records: Vec<WidgetRecord> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_entry(index + 1, &dashboard, entry))
        .collect();

    debug!(file = source_file, records = records.len(), "Queries extracted");

    FileBatch {
        source_file: source_file.to_string(),
        dashboard,
        records,
    }
}
