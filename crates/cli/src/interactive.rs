//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Answer overwrite prompts from the terminal for the existing-file guard.

use std::io::{self, Write};

use pulse_core::Confirm;

/// Reads overwrite answers from stdin, printing the prompt to stdout.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before an answer was given",
            ));
        }
        Ok(input)
    }
}
