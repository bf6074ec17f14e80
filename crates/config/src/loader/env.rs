//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `PULSE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean values return ConfigError::InvalidValue.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_KEEP_GOING, ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_NO_COLOR, ENV_NO_LOG_FILE,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean flag the way shell users write them.
pub(crate) fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(path) = env_var_or_none(ENV_LOG_FILE) {
        loader.set_log_file(Some(PathBuf::from(path)));
    }
    if let Some(filter) = env_var_or_none(ENV_LOG_LEVEL) {
        loader.set_log_filter(Some(filter));
    }
    if let Some(value) = env_var_or_none(ENV_NO_LOG_FILE) {
        loader.set_log_file_disabled(Some(parse_bool(ENV_NO_LOG_FILE, &value)?));
    }
    if let Some(value) = env_var_or_none(ENV_KEEP_GOING) {
        loader.set_keep_going(Some(parse_bool(ENV_KEEP_GOING, &value)?));
    }
    // NO_COLOR is presence-based: any non-empty value disables color.
    if env_var_or_none(ENV_NO_COLOR).is_some() {
        loader.set_color(Some(false));
    }
    Ok(())
}
