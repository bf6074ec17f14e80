//! Data model for dashboard exports and the canonical widget records.
//!
//! Two layers live here:
//! - the all-optional export representation (`ExportDocument` and friends), which
//!   mirrors the JSON shape without asserting anything about it;
//! - the canonical output (`WidgetRecord`, grouped per input file in `FileBatch`),
//!   which every sink consumes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::{lenient, lenient_list, opt_string_from_scalar};

/// A parsed input document. Read-only after parse.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument(serde_json::Value);

impl RawDocument {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Top level of a dashboard export.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ExportDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub dashboards: Option<Section<DashboardEntry>>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Option<Section<WidgetEntry>>,
}

/// A `{ "list": [...] }` wrapper as used by the export format.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct Section<T> {
    #[serde(default, deserialize_with = "lenient_list")]
    pub list: Option<Vec<T>>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self { list: None }
    }
}

/// One entry of `dashboards.list`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DashboardEntry {
    #[serde(default, deserialize_with = "opt_string_from_scalar")]
    pub name: Option<String>,
}

/// One entry of `items.list`, before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WidgetEntry {
    #[serde(default, deserialize_with = "opt_string_from_scalar")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub query: Option<QuerySpec>,
}

impl WidgetEntry {
    /// The raw `query.queryVal` text, if any.
    pub fn query_text(&self) -> Option<&str> {
        self.query.as_ref().and_then(|q| q.query_val.as_deref())
    }
}

/// The `query` object of a widget.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct QuerySpec {
    #[serde(
        rename = "queryVal",
        default,
        deserialize_with = "opt_string_from_scalar"
    )]
    pub query_val: Option<String>,
}

/// Canonical, renderer-agnostic widget record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WidgetRecord {
    /// 1-based position in the source widget list.
    pub sequence: usize,
    pub dashboard: String,
    pub name: String,
    /// Single-line query text.
    pub query: String,
}

/// All records extracted from one input file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileBatch {
    /// Base name of the input file.
    pub source_file: String,
    pub dashboard: String,
    pub records: Vec<WidgetRecord>,
}

impl FileBatch {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
