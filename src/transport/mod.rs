//! HTTP transport boundary
//!
//! The engine consumes an abstract "HTTP GET with query parameters"
//! capability; sockets, TLS, authentication handshakes, retry and backoff are
//! the transport's concern, never the engine's. Any transport error surfaces
//! as-is; the engine does not retry.

use crate::core::error::VendoResult;
use crate::core::query::QueryMap;
use async_trait::async_trait;
use std::collections::HashMap;

#[cfg(feature = "reqwest-transport")]
pub mod rest;

#[cfg(feature = "reqwest-transport")]
pub use rest::{RestTransport, RestTransportConfig};

/// A raw HTTP response as the engine sees it
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,

    /// Response headers, keys lowercased
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// Build a response, lowercasing header names
    pub fn new(status: u16, body: impl Into<String>, headers: HashMap<String, String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        }
    }

    /// A bare success response with no headers, convenient in tests
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body, HashMap::new())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a header, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|v| v.as_str())
    }
}

/// Transport collaborator contract
///
/// Implementations perform the actual HTTP call for a resolved path and its
/// residual query parameters. The engine treats any non-success status as a
/// failure but it is the orchestrator, not the transport, that makes that
/// call, so implementations should return non-2xx responses rather than
/// erroring on them.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform an HTTP GET for the given path and query parameters
    async fn get(&self, path: &str, query: &QueryMap) -> VendoResult<HttpResponse>;
}
