//! Response envelope unwrapping
//!
//! Vendor APIs wrap their payloads in heterogeneous envelopes: some return a
//! bare array, some nest the records under a declared container key, some
//! under ad-hoc keys like `data` or `results`. This module navigates a parsed
//! response along a descriptor's dot-separated root path and degrades
//! gracefully when the shape does not match.
//!
//! Only a body that fails to parse as JSON is a hard failure. A missing root
//! path, a missing fallback container, or a node that is neither array nor
//! object all yield an empty record list: "no matching records" and "wrong
//! path" are often indistinguishable in vendor JSON, and returning empty is
//! safer than spuriously failing a valid empty response.

use crate::core::error::{VendoError, VendoResult};
use crate::core::query::Record;
use serde_json::Value;

/// Container keys tried, in order, when the declared root path is absent
///
/// Fallbacks are probed against the document ROOT, not the partially
/// descended path.
pub const FALLBACK_KEYS: [&str; 3] = ["data", "items", "results"];

/// Parse a raw response body into a JSON document
///
/// This is the only hard failure in the unwrap stage.
pub fn parse(body: &str) -> VendoResult<Value> {
    serde_json::from_str(body).map_err(|e| VendoError::ParseFailure {
        message: e.to_string(),
    })
}

/// Unwrap a parsed document into a flat record list
///
/// - empty `root_path`: the whole document is the payload
/// - array node: one record per element
/// - object node: exactly one record (callers must not assume plurality)
/// - nothing resolves: empty list, never an error
pub fn unwrap(document: &Value, root_path: &str) -> Vec<Record> {
    let node = locate(document, root_path);
    match node {
        Some(value) => collect(value),
        None => Vec::new(),
    }
}

/// Locate the payload node: declared path first, then fixed fallbacks
fn locate<'a>(document: &'a Value, root_path: &str) -> Option<&'a Value> {
    if root_path.trim().is_empty() {
        return Some(document);
    }
    if let Some(node) = descend(document, root_path) {
        return Some(node);
    }
    FALLBACK_KEYS
        .iter()
        .find_map(|key| document.get(key))
}

/// Descend a dot-separated path property by property
///
/// Any missing segment means "not found"; this never panics or errors.
pub(crate) fn descend<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = document;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    Some(node)
}

/// Flatten the located node into records
fn collect(node: &Value) -> Vec<Record> {
    match node {
        Value::Array(elements) => elements.iter().filter_map(as_record).collect(),
        Value::Object(map) => vec![map.clone()],
        _ => Vec::new(),
    }
}

/// Coerce one array element into a record
///
/// Scalar elements are wrapped under a `value` key so that arrays of bare
/// strings or numbers still produce usable records; nulls are dropped.
fn as_record(element: &Value) -> Option<Record> {
    match element {
        Value::Object(map) => Some(map.clone()),
        Value::Null => None,
        other => {
            let mut record = Record::new();
            record.insert("value".to_string(), other.clone());
            Some(record)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_invalid_json_is_hard_failure() {
        let err = parse("<html>oops</html>").unwrap_err();
        assert!(matches!(err, VendoError::ParseFailure { .. }));
    }

    #[test]
    fn test_empty_root_path_uses_whole_document() {
        let doc = json!([{"id": 1}, {"id": 2}]);
        let records = unwrap(&doc, "");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_declared_path_array() {
        let doc = json!({"variations": [{"id": 1}, {"id": 2}, {"id": 3}]});
        let records = unwrap(&doc, "variations");
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_nested_dot_path() {
        let doc = json!({"meta": {"payload": {"rows": [{"id": 1}]}}});
        let records = unwrap(&doc, "meta.payload.rows");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_single_object_yields_one_record() {
        let doc = json!({"profile": {"name": "Ada"}});
        let records = unwrap(&doc, "profile");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], json!("Ada"));
    }

    #[test]
    fn test_fallback_to_data_key() {
        let doc = json!({"data": [{"id": 1}, {"id": 2}]});
        let records = unwrap(&doc, "declared.but.absent");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_fallback_priority_order() {
        let doc = json!({
            "results": [{"id": "from-results"}],
            "items": [{"id": "from-items"}],
            "data": [{"id": "from-data"}]
        });
        let records = unwrap(&doc, "absent");
        assert_eq!(records[0]["id"], json!("from-data"));
    }

    #[test]
    fn test_fallback_probes_document_root_not_partial_path() {
        // `meta` exists but `meta.rows` does not; the fallback must look at
        // the root, where `items` lives
        let doc = json!({"meta": {"count": 2}, "items": [{"id": 1}]});
        let records = unwrap(&doc, "meta.rows");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_nothing_resolves_yields_empty_not_error() {
        let doc = json!({"unrelated": true});
        assert!(unwrap(&doc, "absent").is_empty());
    }

    #[test]
    fn test_scalar_node_yields_empty() {
        let doc = json!({"count": 42});
        assert!(unwrap(&doc, "count").is_empty());
    }

    #[test]
    fn test_scalar_array_elements_wrapped() {
        let doc = json!({"data": ["a", "b"]});
        let records = unwrap(&doc, "data");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["value"], json!("a"));
    }

    #[test]
    fn test_null_array_elements_dropped() {
        let doc = json!({"data": [{"id": 1}, null, {"id": 2}]});
        let records = unwrap(&doc, "data");
        assert_eq!(records.len(), 2);
    }
}
