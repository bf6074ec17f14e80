//! Regression tests for hermetic test isolation around dotenv loading.
//!
//! Responsibilities:
//! - Prove that setting `DOTENV_DISABLED=1` prevents the CLI from loading `.env`.
//! - Prove that when not disabled, the CLI loads `.env` from the working directory.
//!
//! Invariants / assumptions:
//! - The CLI loads dotenv before building its configuration.
//! - `PULSE_LOG_FILE` in `.env` redirects the log file.

mod common;

use common::{SEC_OPS_EXPORT, pulse_cmd, write_file};
use std::fs;
use tempfile::TempDir;

fn hermetic_cli_cmd(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = pulse_cmd();
    cmd.current_dir(dir);

    // The log file is the observable effect of `.env`, so logging must be enabled.
    cmd.env_remove("PULSE_NO_LOG_FILE");

    cmd
}

#[test]
fn test_dotenv_disabled_ignores_env_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env", "PULSE_LOG_FILE=from-dotenv.log\n");
    let input = write_file(temp_dir.path(), "sec.json", SEC_OPS_EXPORT);

    let mut cmd = hermetic_cli_cmd(temp_dir.path());
    cmd.env("DOTENV_DISABLED", "1");
    cmd.arg("-f").arg(&input).assert().success();

    assert!(!temp_dir.path().join("from-dotenv.log").exists());
    assert!(temp_dir.path().join("pulse-query-viewer.log").exists());
}

#[test]
fn test_dotenv_enabled_loads_env_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env", "PULSE_LOG_FILE=from-dotenv.log\n");
    let input = write_file(temp_dir.path(), "sec.json", SEC_OPS_EXPORT);

    let mut cmd = hermetic_cli_cmd(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED");
    cmd.arg("-f").arg(&input).assert().success();

    let log = fs::read_to_string(temp_dir.path().join("from-dotenv.log")).unwrap();
    assert!(log.contains("Application initialized"));
    assert!(!temp_dir.path().join("pulse-query-viewer.log").exists());
}

#[test]
fn test_malformed_dotenv_fails_without_echoing_it() {
    let temp_dir = TempDir::new().unwrap();
    let marker = "log-path-that-must-not-leak.log";
    write_file(
        temp_dir.path(),
        ".env",
        &format!("PULSE_LOG_FILE={marker}\nINVALID_LINE_WITHOUT_EQUALS"),
    );
    let input = write_file(temp_dir.path(), "sec.json", SEC_OPS_EXPORT);

    let mut cmd = hermetic_cli_cmd(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED");
    let output = cmd.arg("-f").arg(&input).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".env"));
    assert!(!stderr.contains(marker));
    assert!(!stderr.contains("INVALID_LINE_WITHOUT_EQUALS"));
}

#[test]
fn test_dotenv_disabled_skips_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env", "INVALID_LINE_WITHOUT_EQUALS");
    let input = write_file(temp_dir.path(), "sec.json", SEC_OPS_EXPORT);

    let mut cmd = hermetic_cli_cmd(temp_dir.path());
    cmd.env("DOTENV_DISABLED", "1");
    cmd.arg("-f").arg(&input).assert().success();
}
