//! Document loader.
//!
//! Responsibilities:
//! - Check the `.json` suffix, read the file, and parse it as a generic JSON tree.
//! - Map every failure to exactly one `InputError` variant and log it.
//!
//! Does NOT handle:
//! - Interpreting the tree (see `extract`).
//!
//! Invariants:
//! - No partial success: either a fully parsed document or an error.
//! - Exactly one error-level log event per failure, emitted before returning it.

use std::io;
use std::path::Path;

use pulse_config::constants::JSON_EXT;
use tracing::{debug, error, info};

use crate::error::InputError;
use crate::models::RawDocument;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// True when `path` ends in `.json` (ASCII case-insensitive).
pub fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(JSON_EXT))
}

/// Load and parse one input document.
pub fn load(path: &Path) -> Result<RawDocument, InputError> {
    info!(path = %path.display(), "Loading JSON data");

    load_inner(path).inspect_err(|e| error!(path = %path.display(), "{e}"))
}

fn load_inner(path: &Path) -> Result<RawDocument, InputError> {
    if !has_json_extension(path) {
        return Err(InputError::NotJsonExtension {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Unexpected {
            path: path.to_path_buf(),
            detail: e.to_string(),
        },
    })?;

    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| InputError::ParseFailure {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    debug!(path = %path.display(), bytes = bytes.len(), "JSON data loaded successfully");
    Ok(RawDocument::new(value))
}
