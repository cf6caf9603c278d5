//! Shared test support: a scriptable mock transport

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use vendo::prelude::*;

/// Install the test log subscriber once; honors `RUST_LOG`
///
/// Later calls are no-ops, so every test can call this unconditionally.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One request as the mock saw it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// Transport that serves canned responses and records every request
///
/// Responses are registered per path; unregistered paths get the default
/// response (`200 []` unless overridden).
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, HttpResponse>,
    default_response: Option<HttpResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for requests to `path`
    pub fn respond(mut self, path: &str, response: HttpResponse) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    /// Serve a 200 response with `body` for requests to `path`
    pub fn respond_ok(self, path: &str, body: &str) -> Self {
        self.respond(path, HttpResponse::ok(body))
    }

    /// Serve `response` for any unregistered path
    pub fn default_response(mut self, response: HttpResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// All requests seen so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request seen so far; panics if there were zero or many
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, path: &str, query: &QueryMap) -> VendoResult<HttpResponse> {
        let mut pairs: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.sort();
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            query: pairs,
        });

        Ok(self
            .responses
            .get(path)
            .or(self.default_response.as_ref())
            .cloned()
            .unwrap_or_else(|| HttpResponse::ok("[]")))
    }
}
