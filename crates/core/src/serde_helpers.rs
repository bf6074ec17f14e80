//! Serde helpers for loosely-typed dashboard exports.
//!
//! Responsibilities:
//! - Provide deserializers that never fail on an unexpected shape: a field that is
//!   the wrong type decodes as absent instead of failing the whole document.
//! - Accept numbers and booleans where text is expected.
//!
//! Explicitly does NOT handle:
//! - Applying default values (the normalizer owns the default policy).
//!
//! Invariants / assumptions:
//! - Exports come from several product versions; any field may be missing, null,
//!   or of an unexpected type.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
    Other(IgnoredAny),
}

/// Decode a text field, rendering numbers and booleans as text.
///
/// Null, objects, and arrays decode as `None`.
pub fn opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Scalar::Other(_)) => None,
        Some(Scalar::String(s)) => Some(s),
        Some(Scalar::U64(v)) => Some(v.to_string()),
        Some(Scalar::I64(v)) => Some(v.to_string()),
        Some(Scalar::F64(v)) => Some(v.to_string()),
        Some(Scalar::Bool(v)) => Some(v.to_string()),
    })
}

/// Decode a nested structure, treating a shape mismatch as absent.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| T::deserialize(v).ok()))
}

/// Decode a list whose elements may individually be malformed.
///
/// A non-array value decodes as `None`; an element that does not match `T`
/// decodes as `T::default()` so positions are preserved.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| T::deserialize(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}
