//! Pagination normalization
//!
//! Vendors disagree on paging: some take offset/limit, some take
//! page/per_page, some cannot page at all. This module reconciles a requested
//! (page, size) against whichever convention the vendor supports and folds
//! the response back into the uniform [`PagedResult`] contract.

use crate::core::query::{PagedResult, QueryMap, Record};
use crate::engine::unwrap::descend;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Body fields probed, in order, for an explicit grand total
const TOTAL_FIELDS: [&str; 3] = ["total", "meta.total", "meta.pagination.total"];

/// Response header probed for a grand total
const TOTAL_HEADER: &str = "x-total-count";

/// Per-vendor paging convention
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PagingStrategy {
    /// Vendor has no server-side paging; the engine fetches everything and
    /// slices in memory (client-slicing mode)
    #[default]
    None,

    /// Vendor pages with `offset` and `limit` style parameters
    OffsetLimit {
        #[serde(default = "default_offset_param")]
        offset_param: String,
        #[serde(default = "default_limit_param")]
        limit_param: String,
    },

    /// Vendor pages with `page` and `per_page` style parameters
    PagePerPage {
        #[serde(default = "default_page_param")]
        page_param: String,
        #[serde(default = "default_size_param")]
        size_param: String,
    },
}

fn default_offset_param() -> String {
    "offset".to_string()
}

fn default_limit_param() -> String {
    "limit".to_string()
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_size_param() -> String {
    "per_page".to_string()
}

impl PagingStrategy {
    /// Offset/limit paging with the conventional parameter names
    pub fn offset_limit() -> Self {
        Self::OffsetLimit {
            offset_param: default_offset_param(),
            limit_param: default_limit_param(),
        }
    }

    /// Page/per_page paging with the conventional parameter names
    pub fn page_per_page() -> Self {
        Self::PagePerPage {
            page_param: default_page_param(),
            size_param: default_size_param(),
        }
    }

    /// Whether the vendor slices server-side (passthrough mode)
    pub fn is_server_side(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Inject the vendor's native paging parameters into the query map
    pub fn apply(&self, page_number: usize, page_size: usize, query: &mut QueryMap) {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        match self {
            Self::None => {}
            Self::OffsetLimit {
                offset_param,
                limit_param,
            } => {
                let offset = (page_number - 1).saturating_mul(page_size);
                query.insert(offset_param, offset.to_string());
                query.insert(limit_param, page_size.to_string());
            }
            Self::PagePerPage {
                page_param,
                size_param,
            } => {
                query.insert(page_param, page_number.to_string());
                query.insert(size_param, page_size.to_string());
            }
        }
    }
}

/// Normalize a full, unpaged result set by slicing it in memory
///
/// The total is exact in this mode.
pub fn normalize_sliced(page_number: usize, page_size: usize, all: Vec<Record>) -> PagedResult {
    let page_number = page_number.max(1);
    let page_size = page_size.max(1);
    let total = all.len();

    let start = (page_number - 1).saturating_mul(page_size);
    let data: Vec<Record> = all
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    let total_pages = pages_for(total, page_size);
    PagedResult {
        data,
        page_number,
        page_size,
        total_records: total,
        total_pages,
        has_previous_page: page_number > 1,
        has_next_page: page_number < total_pages,
        total_is_exact: true,
    }
}

/// Normalize a server-paged response
///
/// The total is inferred in priority order: an explicit grand-total field in
/// the body, a total-count header, then the lower bound
/// `(page-1)*size + len(items)`. The lower bound is NOT a true total and is
/// flagged through `total_is_exact = false`.
pub fn normalize_passthrough(
    page_number: usize,
    page_size: usize,
    items: Vec<Record>,
    document: &Value,
    headers: &HashMap<String, String>,
) -> PagedResult {
    let page_number = page_number.max(1);
    let page_size = page_size.max(1);
    let seen = (page_number - 1)
        .saturating_mul(page_size)
        .saturating_add(items.len());

    let (total, exact) = match total_hint(document, headers) {
        Some(total) => (total.max(seen), true),
        None => (seen, false),
    };

    let total_pages = pages_for(total, page_size);
    let has_next_page = if exact {
        page_number < total_pages
    } else {
        // A short page implies exhaustion; a full page implies more
        items.len() == page_size
    };

    PagedResult {
        data: items,
        page_number,
        page_size,
        total_records: total,
        total_pages,
        has_previous_page: page_number > 1,
        has_next_page,
        total_is_exact: exact,
    }
}

/// Probe the body and headers for an explicit grand total
fn total_hint(document: &Value, headers: &HashMap<String, String>) -> Option<usize> {
    for field in TOTAL_FIELDS {
        if let Some(total) = descend(document, field).and_then(value_as_count) {
            return Some(total);
        }
    }
    headers
        .get(TOTAL_HEADER)
        .and_then(|v| v.trim().parse::<usize>().ok())
}

/// Accept numeric totals and numeric strings (some vendors quote them)
fn value_as_count(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

fn pages_for(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}
