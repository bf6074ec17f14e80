//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and validation.
//! - Test environment variable handling and precedence.
//!
//! Invariants / Assumptions:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use crate::constants::{DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use serial_test::serial;
use std::path::PathBuf;
use std::sync::Mutex;

fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

fn loader_with_input() -> ConfigLoader {
    ConfigLoader::new().with_inputs(vec![PathBuf::from("dash.json")])
}

const CLEARED: [(&str, Option<&str>); 5] = [
    ("PULSE_LOG_FILE", None),
    ("PULSE_LOG_LEVEL", None),
    ("PULSE_NO_LOG_FILE", None),
    ("PULSE_KEEP_GOING", None),
    ("NO_COLOR", None),
];

#[test]
fn test_build_defaults() {
    let config = loader_with_input().build().unwrap();

    assert_eq!(config.inputs, vec![PathBuf::from("dash.json")]);
    assert!(config.outputs.is_console_only());
    assert_eq!(config.logging.file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
    assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    assert!(!config.keep_going);
    assert!(config.color);
    assert!(!config.is_multi_file());
}

#[test]
fn test_build_requires_inputs() {
    let err = ConfigLoader::new().build().unwrap_err();
    assert!(matches!(err, ConfigError::NoInputs));
}

#[test]
fn test_build_accepts_both_outputs() {
    let config = loader_with_input()
        .with_csv_output(PathBuf::from("out.csv"))
        .with_markdown_output(PathBuf::from("out.md"))
        .build()
        .unwrap();

    assert_eq!(config.outputs.csv, Some(PathBuf::from("out.csv")));
    assert_eq!(config.outputs.markdown, Some(PathBuf::from("out.md")));
}

#[test]
fn test_build_rejects_identical_outputs() {
    let err = loader_with_input()
        .with_csv_output(PathBuf::from("report.txt"))
        .with_markdown_output(PathBuf::from("report.txt"))
        .build()
        .unwrap_err();

    assert!(matches!(err, ConfigError::ConflictingOutputs { .. }));
}

#[test]
fn test_build_rejects_outputs_differing_only_by_cur_dir() {
    let err = loader_with_input()
        .with_csv_output(PathBuf::from("out.csv"))
        .with_markdown_output(PathBuf::from("./out.csv"))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingOutputs { .. }));

    let err = loader_with_input()
        .with_csv_output(PathBuf::from("reports/./queries.txt"))
        .with_markdown_output(PathBuf::from("reports/queries.txt"))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingOutputs { .. }));
}

#[test]
fn test_build_rejects_relative_and_absolute_spelling_of_same_output() {
    let cwd = std::env::current_dir().unwrap();
    let err = loader_with_input()
        .with_csv_output(PathBuf::from("report.txt"))
        .with_markdown_output(cwd.join("report.txt"))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingOutputs { .. }));
}

#[test]
fn test_build_rejects_blank_filter() {
    let err = loader_with_input()
        .with_log_filter("   ".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::EmptyLogFilter));
}

#[test]
fn test_without_log_file_wins_over_path() {
    let config = loader_with_input()
        .with_log_file(PathBuf::from("custom.log"))
        .without_log_file()
        .build()
        .unwrap();
    assert_eq!(config.logging.file, None);
}

#[test]
fn test_multi_file_mode() {
    let config = ConfigLoader::new()
        .with_inputs(vec![PathBuf::from("a.json"), PathBuf::from("b.json")])
        .build()
        .unwrap();
    assert!(config.is_multi_file());
}

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("PULSE_LOG_FILE", Some("logs/pulse-env.log")),
            ("PULSE_LOG_LEVEL", Some("info")),
            ("PULSE_NO_LOG_FILE", None),
            ("PULSE_KEEP_GOING", Some("yes")),
            ("NO_COLOR", Some("1")),
        ],
        || {
            let config = loader_with_input().from_env().unwrap().build().unwrap();
            assert_eq!(
                config.logging.file,
                Some(PathBuf::from("logs/pulse-env.log"))
            );
            assert_eq!(config.logging.filter, "info");
            assert!(config.keep_going);
            assert!(!config.color);
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("PULSE_LOG_LEVEL", Some("info")),
            ("PULSE_KEEP_GOING", Some("true")),
        ],
        || {
            let config = loader_with_input()
                .from_env()
                .unwrap()
                .with_log_filter("pulse_core=trace".to_string())
                .with_keep_going(false)
                .build()
                .unwrap();
            assert_eq!(config.logging.filter, "pulse_core=trace");
            assert!(!config.keep_going);
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("PULSE_LOG_FILE", Some("")),
            ("PULSE_LOG_LEVEL", Some("   ")),
            ("NO_COLOR", Some("")),
        ],
        || {
            let config = loader_with_input().from_env().unwrap().build().unwrap();
            assert_eq!(config.logging.file, Some(PathBuf::from(DEFAULT_LOG_FILE)));
            assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
            assert!(config.color);
        },
    );
}

#[test]
#[serial]
fn test_no_log_file_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("PULSE_NO_LOG_FILE", Some("1"))], || {
        let config = loader_with_input().from_env().unwrap().build().unwrap();
        assert_eq!(config.logging.file, None);
    });
}

#[test]
#[serial]
fn test_invalid_bool_env_rejected() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("PULSE_KEEP_GOING", Some("sometimes"))], || {
        let err = loader_with_input().from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "PULSE_KEEP_GOING"));
    });
}

#[test]
#[serial]
fn test_cleared_env_keeps_defaults() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(CLEARED, || {
        let config = loader_with_input().from_env().unwrap().build().unwrap();
        assert!(!config.keep_going);
        assert!(config.color);
    });
}

#[test]
#[serial]
fn test_load_dotenv_disabled_is_noop() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(loader_with_input().load_dotenv().is_ok());
    });
}
