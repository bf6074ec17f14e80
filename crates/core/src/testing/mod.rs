//! Testing utilities for pipeline tests.
//!
//! Fixture loading and a scripted stand-in for the operator prompt.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use pulse_core::testing::{fixture_path, ScriptedConfirm};
//!
//! let input = fixture_path("sec_ops.json");
//! let confirm = ScriptedConfirm::new(["y"]);
//! ```

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use crate::guard::Confirm;

/// Absolute path of a file inside the fixtures directory.
pub fn fixture_path(fixture: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture: &str) -> serde_json::Value {
    let full_path = fixture_path(fixture);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Answers prompts from a fixed script and records every prompt shown.
///
/// Once the script runs out, `ask` fails with `UnexpectedEof`, the same way a
/// closed stdin does.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Confirm for ScriptedConfirm {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}
