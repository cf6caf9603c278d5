//! Query maps, records and the uniform paged-result contract

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A generic record: one string-keyed JSON object returned by a vendor API
pub type Record = serde_json::Map<String, Value>;

/// A flat, case-insensitive string-to-string query map
///
/// Lookups fold case, and the last write for a repeated key wins. The key
/// casing of that last write is preserved: query-parameter names are
/// case-sensitive on most servers, so what the caller wrote is what goes on
/// the wire. Insertion order carries no meaning.
///
/// # Example
/// ```rust,ignore
/// let mut query = QueryMap::new();
/// query.insert("ProductId", "42");
/// assert_eq!(query.get("productid"), Some("42"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryMap {
    // folded key -> (key as written, value)
    entries: HashMap<String, (String, String)>,
}

impl QueryMap {
    /// Create an empty query map
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a key/value pair; last write wins and keeps its casing
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let key = key.as_ref();
        self.entries
            .insert(key.to_lowercase(), (key.to_string(), value.into()));
    }

    /// Look up a value by key, case-insensitively
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_lowercase())
            .map(|(_, v)| v.as_str())
    }

    /// Whether the key is present with a non-blank value
    pub fn has_non_blank(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.trim().is_empty())
    }

    /// Remove a key, case-insensitively
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(&key.to_lowercase()).map(|(_, v)| v)
    }

    /// Iterate over all entries, keys in their as-written casing
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.values().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// The uniform paged-result contract produced by every connector
///
/// Constructed fresh per call and never mutated after return.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult {
    /// The records for the requested page
    pub data: Vec<Record>,

    /// Requested page number (starts at 1)
    pub page_number: usize,

    /// Requested page size (at least 1)
    pub page_size: usize,

    /// Total record count. When `total_is_exact` is false this is a LOWER
    /// BOUND ("at least this many seen so far"), not a true total.
    pub total_records: usize,

    /// Total page count derived from `total_records` (at least 1)
    pub total_pages: usize,

    /// Whether a previous page exists (`page_number > 1`)
    pub has_previous_page: bool,

    /// Whether a next page exists; heuristic when no true total is known
    pub has_next_page: bool,

    /// True when `total_records` came from an exact source (client-side
    /// slicing, a grand-total body field, or a total-count header)
    pub total_is_exact: bool,
}

impl PagedResult {
    /// An empty result for the given page request
    pub fn empty(page_number: usize, page_size: usize) -> Self {
        Self {
            data: Vec::new(),
            page_number: page_number.max(1),
            page_size: page_size.max(1),
            total_records: 0,
            total_pages: 1,
            has_previous_page: page_number > 1,
            has_next_page: false,
            total_is_exact: true,
        }
    }
}
