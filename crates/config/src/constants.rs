//! Centralized constants for the Pulse Query Viewer workspace.
//!
//! This module contains default values and fixed strings used across crates to
//! avoid duplication between the extraction core and the CLI harness.

// =============================================================================
// File Suffixes
// =============================================================================

/// Suffix every input document must carry.
pub const JSON_EXT: &str = "json";

/// Conventional suffix for CSV output.
pub const CSV_EXT: &str = "csv";

/// Conventional suffix for Markdown output.
pub const MD_EXT: &str = "md";

/// Marker inserted before the extension of an archived output file.
pub const OLD_MARKER: &str = "old";

/// `chrono` format string for the archive timestamp (`YYYYMMDD_HHMMSS`).
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// =============================================================================
// Extraction Defaults
// =============================================================================

/// Dashboard name used when `dashboards.list[0].name` cannot be resolved.
pub const DEFAULT_DASHBOARD_NAME: &str = "Global Dashboard Name Not Found";

/// Widget name used when an item carries no `name`.
pub const DEFAULT_WIDGET_NAME: &str = "Name not found";

/// Query text used when an item carries no `query.queryVal`.
pub const DEFAULT_QUERY: &str = "Query not found";

// =============================================================================
// Report Layout
// =============================================================================

/// Field delimiter for CSV output.
pub const CSV_DELIMITER: u8 = b';';

/// Title written once at the top of a fresh Markdown report.
pub const MARKDOWN_TITLE: &str = "QRadar Pulse Dashboard Queries";

/// Paragraph written under the Markdown title.
pub const MARKDOWN_PREAMBLE: &str = "This document contains the queries extracted from various QRadar Pulse Dashboards. \
Feel free to search and navigate through the document to find the information you need.";

/// Line written under each per-file Markdown heading.
pub const MARKDOWN_FILE_NOTE: &str =
    "The queries below are extracted from the above mentioned JSON file.";

/// Info string attached to fenced query blocks.
pub const QUERY_FENCE_LANG: &str = "sql";

// =============================================================================
// Logging
// =============================================================================

/// Log file written in the working directory when none is configured.
pub const DEFAULT_LOG_FILE: &str = "pulse-query-viewer.log";

/// Default `tracing` filter directive for the log file.
pub const DEFAULT_LOG_FILTER: &str = "debug";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the log file path.
pub const ENV_LOG_FILE: &str = "PULSE_LOG_FILE";

/// Overrides the log filter directive.
pub const ENV_LOG_LEVEL: &str = "PULSE_LOG_LEVEL";

/// Disables the persistent log file when truthy.
pub const ENV_NO_LOG_FILE: &str = "PULSE_NO_LOG_FILE";

/// Skips unreadable inputs instead of aborting when truthy.
pub const ENV_KEEP_GOING: &str = "PULSE_KEEP_GOING";

/// Community convention for disabling colored output (any non-empty value).
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
