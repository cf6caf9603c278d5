//! reqwest-backed transport
//!
//! A plain GET transport with static auth header injection. Timeouts are
//! enforced here (the engine has no timeout of its own); retry and backoff
//! are deliberately absent.

use crate::core::error::{VendoError, VendoResult};
use crate::core::query::QueryMap;
use crate::transport::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for [`RestTransport`]
#[derive(Debug, Clone)]
pub struct RestTransportConfig {
    /// Base URL the resolved endpoint paths are joined onto,
    /// e.g. `https://api.example.com/v3`
    pub base_url: String,

    /// Optional bearer token, sent as `Authorization: Bearer <token>`
    pub bearer_token: Option<String>,

    /// Optional static header, e.g. a vendor access-token header
    pub header: Option<(String, String)>,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// User agent (default: `vendo/<version>`)
    pub user_agent: String,
}

impl RestTransportConfig {
    /// Config for a base URL with no auth and default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: None,
            header: None,
            timeout_secs: 30,
            user_agent: concat!("vendo/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set a bearer token
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set a static auth header
    pub fn auth_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header = Some((name.into(), value.into()));
        self
    }
}

/// reqwest-based [`HttpTransport`] implementation
pub struct RestTransport {
    client: reqwest::Client,
    config: RestTransportConfig,
}

impl RestTransport {
    /// Create a transport from configuration
    ///
    /// # Errors
    ///
    /// Returns [`VendoError::Transport`] if HTTP client creation fails
    /// (e.g. TLS or proxy misconfiguration).
    pub fn new(config: RestTransportConfig) -> VendoResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VendoError::Transport {
                message: format!("HTTP client: {}", e),
            })?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl HttpTransport for RestTransport {
    async fn get(&self, path: &str, query: &QueryMap) -> VendoResult<HttpResponse> {
        let pairs: Vec<(&str, &str)> = query.iter().collect();
        let mut request = self.client.get(self.url(path)).query(&pairs);
        if let Some(ref token) = self.config.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some((ref name, ref value)) = self.config.header {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse::new(status, body, headers))
    }
}
