//! Resolved configuration types.
//!
//! Responsibilities:
//! - Hold the fully merged settings for one run (inputs, outputs, logging).
//!
//! Does NOT handle:
//! - Merging or validation (see `loader::builder`).

use std::path::PathBuf;

/// Output files requested for a run.
///
/// Both may be set; each active target gets its own sink and guard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTargets {
    pub csv: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
}

impl OutputTargets {
    /// True when neither file output is requested and results go to the console.
    pub fn is_console_only(&self) -> bool {
        self.csv.is_none() && self.markdown.is_none()
    }
}

/// Persistent log settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log file to append to; `None` disables the file log.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive (e.g. `debug`, `pulse_core=info`).
    pub filter: String,
}

/// Complete configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input documents, in processing order.
    pub inputs: Vec<PathBuf>,
    pub outputs: OutputTargets,
    pub logging: LoggingConfig,
    /// Skip inputs that fail to load instead of aborting the run.
    pub keep_going: bool,
    /// Colorize console output.
    pub color: bool,
}

impl Config {
    /// Multi-file mode adds the source file column to CSV output.
    pub fn is_multi_file(&self) -> bool {
        self.inputs.len() > 1
    }
}
