//! Record extractor.
//!
//! Walks a parsed document to recover the dashboard name and the ordered widget
//! entries. Nothing here fails: missing or mistyped structure degrades to the
//! sentinel dashboard name and an empty entry list.

use pulse_config::constants::DEFAULT_DASHBOARD_NAME;
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{ExportDocument, RawDocument, WidgetEntry};

/// Dashboard name plus raw widget entries, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub dashboard: String,
    pub entries: Vec<WidgetEntry>,
}

/// Extract the dashboard name and widget entries from a document.
pub fn extract(doc: &RawDocument) -> Extraction {
    let export = ExportDocument::deserialize(doc.as_value()).unwrap_or_else(|e| {
        warn!("Document root is not an object, treating it as empty: {e}");
        ExportDocument::default()
    });

    let dashboard = export
        .dashboards
        .and_then(|section| section.list)
        .and_then(|list| list.into_iter().next())
        .and_then(|entry| entry.name)
        .unwrap_or_else(|| DEFAULT_DASHBOARD_NAME.to_string());

    let entries = export
        .items
        .and_then(|section| section.list)
        .unwrap_or_default();

    info!(
        dashboard = %dashboard,
        widgets = entries.len(),
        "Queries and Dashboard name extracted"
    );

    Extraction { dashboard, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract_json(value: serde_json::Value) -> Extraction {
        extract(&RawDocument::new(value))
    }

    #[test]
    fn test_extract_dashboard_and_entries() {
        let extraction = extract_json(json!({
            "dashboards": {"list": [{"name": "Sec Ops"}, {"name": "Ignored"}]},
            "items": {"list": [{"name": "A"}, {"name": "B"}]}
        }));

        assert_eq!(extraction.dashboard, "Sec Ops");
        assert_eq!(extraction.entries.len(), 2);
        assert_eq!(extraction.entries[1].name.as_deref(), Some("B"));
    }

    #[test]
    fn test_missing_dashboards_uses_sentinel() {
        let extraction = extract_json(json!({"items": {"list": []}}));
        assert_eq!(extraction.dashboard, DEFAULT_DASHBOARD_NAME);
    }

    #[test]
    fn test_empty_dashboards_list_uses_sentinel() {
        let extraction = extract_json(json!({"dashboards": {"list": []}}));
        assert_eq!(extraction.dashboard, DEFAULT_DASHBOARD_NAME);
    }

    #[test]
    fn test_first_dashboard_without_name_uses_sentinel() {
        let extraction = extract_json(json!({"dashboards": {"list": [{"id": 1}]}}));
        assert_eq!(extraction.dashboard, DEFAULT_DASHBOARD_NAME);
    }

    #[test]
    fn test_explicit_empty_dashboard_name_kept() {
        let extraction = extract_json(json!({"dashboards": {"list": [{"name": ""}]}}));
        assert_eq!(extraction.dashboard, "");
    }

    #[test]
    fn test_absent_items_is_empty() {
        let extraction = extract_json(json!({"dashboards": {"list": [{"name": "D"}]}}));
        assert!(extraction.entries.is_empty());
    }

    #[test]
    fn test_non_object_root_is_empty() {
        let extraction = extract_json(json!([1, 2, 3]));
        assert_eq!(extraction.dashboard, DEFAULT_DASHBOARD_NAME);
        assert!(extraction.entries.is_empty());
    }
}
