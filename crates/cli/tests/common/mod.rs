//! Shared test utilities for pulse-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write dashboard exports into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - The persistent log file is disabled unless a test re-enables it.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Export with one dashboard and two widgets, one of them multi-line.
pub const SEC_OPS_EXPORT: &str = r#"{
  "dashboards": {"list": [{"name": "Sec Ops"}]},
  "items": {"list": [
    {"name": "Failed Logins", "query": {"queryVal": "SELECT *\nFROM events"}},
    {"name": "Top Talkers", "query": {"queryVal": "SELECT sourceip, SUM(bytes) FROM flows GROUP BY sourceip"}}
  ]}
}"#;

/// Export whose `items.list` is absent.
pub const EMPTY_EXPORT: &str = r#"{"dashboards": {"list": [{"name": "Empty Board"}]}}"#;

/// Returns a hermetic `pulse-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `PULSE_NO_LOG_FILE=1` keeps tests from writing log files.
/// - Other `PULSE_*` variables are cleared to ensure no leakage from the host.
pub fn pulse_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pulse-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("PULSE_NO_LOG_FILE", "1");
    cmd.env("NO_COLOR", "1");

    // Clear potential host leakage
    cmd.env_remove("PULSE_LOG_FILE")
        .env_remove("PULSE_LOG_LEVEL")
        .env_remove("PULSE_KEEP_GOING");

    cmd
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
