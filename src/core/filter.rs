//! Caller-supplied filters and their translation into query maps

use crate::core::query::QueryMap;
use serde::{Deserialize, Serialize};

/// A single filter supplied per call by the caller
///
/// `value` of `None` is stored as an empty string in the query map: an
/// explicit "present but empty" parameter is distinct from an absent one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    /// Field name; blank names are skipped during translation
    pub field: String,

    /// Comparison operator, "=" unless the caller says otherwise
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Filter value; `None` means "present but empty"
    pub value: Option<String>,
}

fn default_operator() -> String {
    "=".to_string()
}

impl Filter {
    /// Create an equality filter
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: default_operator(),
            value: Some(value.into()),
        }
    }

    /// Create a filter with an explicit operator
    pub fn with_operator(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: Some(value.into()),
        }
    }
}

/// Translate filters into a flat query map
///
/// Entries with blank field names are skipped, field names are trimmed, and
/// the last filter for a repeated field wins. No validation against any
/// descriptor happens here; that is the endpoint resolver's job.
pub fn translate(filters: &[Filter]) -> QueryMap {
    let mut query = QueryMap::new();
    for filter in filters {
        let field = filter.field.trim();
        if field.is_empty() {
            continue;
        }
        query.insert(field, filter.value.clone().unwrap_or_default());
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_basic() {
        let query = translate(&[Filter::new("status", "active")]);
        assert_eq!(query.get("status"), Some("active"));
    }

    #[test]
    fn test_translate_skips_blank_field_names() {
        let query = translate(&[
            Filter::new("", "ignored"),
            Filter::new("   ", "also ignored"),
            Filter::new("kept", "yes"),
        ]);
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("kept"), Some("yes"));
    }

    #[test]
    fn test_translate_trims_field_names() {
        let query = translate(&[Filter::new("  productId  ", "42")]);
        assert_eq!(query.get("productId"), Some("42"));
    }

    #[test]
    fn test_translate_none_value_becomes_empty_string() {
        let filter = Filter {
            field: "cursor".to_string(),
            operator: "=".to_string(),
            value: None,
        };
        let query = translate(&[filter]);
        // Present-but-empty, distinct from absent
        assert_eq!(query.get("cursor"), Some(""));
    }

    #[test]
    fn test_translate_last_filter_wins() {
        let query = translate(&[Filter::new("status", "open"), Filter::new("status", "closed")]);
        assert_eq!(query.get("status"), Some("closed"));
    }

    #[test]
    fn test_default_operator_is_equals() {
        let filter = Filter::new("a", "b");
        assert_eq!(filter.operator, "=");
    }

    #[test]
    fn test_filter_deserializes_without_operator() {
        let filter: Filter = serde_json::from_str(r#"{"field":"id","value":"7"}"#).unwrap();
        assert_eq!(filter.operator, "=");
        assert_eq!(filter.value.as_deref(), Some("7"));
    }
}
