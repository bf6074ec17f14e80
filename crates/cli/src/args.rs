//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Apply parsed flags on top of an environment-loaded `ConfigLoader`.
//!
//! Non-responsibilities:
//! - Does not validate combinations (see `ConfigLoader::build`).
//! - Does not execute anything (see `dispatch` module).

use clap::Parser;
use pulse_config::ConfigLoader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pulse-cli")]
#[command(
    about = "Extract widget queries from QRadar Pulse dashboard exports",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pulse-cli -f dashboard.json\n  pulse-cli -f a.json b.json -c queries.csv\n  pulse-cli -f dashboard.json -m queries.md -c queries.csv\n  pulse-cli -f *.json -c all.csv --keep-going\n"
)]
pub struct Cli {
    /// Dashboard export file(s) to read (must end in .json)
    #[arg(short = 'f', long = "file", value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Append results to this CSV file (semicolon-delimited)
    #[arg(short, long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Append results to this Markdown file
    #[arg(short, long, value_name = "FILE")]
    pub markdown: Option<PathBuf>,

    /// Log file path (default: pulse-query-viewer.log; env PULSE_LOG_FILE)
    #[arg(long, value_name = "FILE", conflicts_with = "no_log_file")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `pulse_core=debug` (env PULSE_LOG_LEVEL)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Do not write a log file; warnings and errors go to stderr instead
    #[arg(long)]
    pub no_log_file: bool,

    /// Skip input files that cannot be read or parsed instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Layer the command-line values over `loader`. Flags win over environment values.
    pub fn apply(self, loader: ConfigLoader) -> ConfigLoader {
        let mut loader = loader.with_inputs(self.files);

        if let Some(path) = self.csv {
            loader = loader.with_csv_output(path);
        }
        if let Some(path) = self.markdown {
            loader = loader.with_markdown_output(path);
        }
        if let Some(path) = self.log_file {
            loader = loader.with_log_file(path);
        }
        if let Some(filter) = self.log_level {
            loader = loader.with_log_filter(filter);
        }
        if self.no_log_file {
            loader = loader.without_log_file();
        }
        if self.keep_going {
            loader = loader.with_keep_going(true);
        }
        if self.no_color {
            loader = loader.with_color(false);
        }
        loader
    }
}
