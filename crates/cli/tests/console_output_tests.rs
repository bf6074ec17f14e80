//! Console rendering and basic invocation tests.

mod common;

use common::{EMPTY_EXPORT, SEC_OPS_EXPORT, pulse_cmd, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_console_lists_dashboard_and_widgets() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "sec.json", SEC_OPS_EXPORT);

    pulse_cmd()
        .arg("-f")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard: Sec Ops"))
        .stdout(predicate::str::contains("Widget Number: 1"))
        .stdout(predicate::str::contains("Name: Failed Logins"))
        .stdout(predicate::str::contains("Query: SELECT * FROM events"))
        .stdout(predicate::str::contains("Widget Number: 2"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_empty_export_reports_no_queries() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "empty.json", EMPTY_EXPORT);

    pulse_cmd()
        .arg("-f")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("No queries found in"));
}

#[test]
fn test_empty_export_does_not_stop_later_files() {
    let dir = TempDir::new().unwrap();
    let empty = write_file(dir.path(), "empty.json", EMPTY_EXPORT);
    let full = write_file(dir.path(), "sec.json", SEC_OPS_EXPORT);

    pulse_cmd()
        .arg("-f")
        .arg(&empty)
        .arg(&full)
        .assert()
        .success()
        .stdout(predicate::str::contains("No queries found in"))
        .stdout(predicate::str::contains("Dashboard: Sec Ops"))
        .stdout(predicate::str::contains("Processed 2 file(s)"));
}

#[test]
fn test_no_arguments_prints_help_and_fails() {
    pulse_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_version_flag() {
    pulse_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_log_file_records_run() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "sec.json", SEC_OPS_EXPORT);
    let log = dir.path().join("run.log");

    pulse_cmd()
        .env_remove("PULSE_NO_LOG_FILE")
        .arg("-f")
        .arg(&input)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let content = std::fs::read_to_string(&log).unwrap();
    assert!(content.contains("Loading JSON data"));
    assert!(content.contains("Queries and Dashboard name extracted"));
    assert!(!content.contains('\u{1b}'));
}
