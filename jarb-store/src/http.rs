//! HTTP implementation of [`ConstraintsFetcher`].

use crate::error::{StoreError, StoreResult};
use crate::fetcher::{ConstraintsFetcher, FetchResponse};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for [`HttpFetcher`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpFetcherConfig {
    /// Prefix for relative URLs (e.g. `https://api.example.com`).
    /// Absolute `http(s)://` URLs are requested as given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout (in seconds).
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
            user_agent: concat!("jarb-store/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches constraints with a `GET` request and parses the body as JSON.
pub struct HttpFetcher {
    config: HttpFetcherConfig,
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with its own HTTP client.
    pub fn new(config: HttpFetcherConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { config, client })
    }

    /// Creates a fetcher sharing an existing client (timeouts and agent come from the client).
    pub fn with_client(config: HttpFetcherConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &HttpFetcherConfig {
        &self.config
    }

    /// Resolves `url` against the configured base URL.
    pub fn resolve_url(&self, url: &str) -> StoreResult<String> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Ok(url.to_string());
        }
        match &self.config.base_url {
            Some(base) => Ok(format!(
                "{}/{}",
                base.trim_end_matches('/'),
                url.trim_start_matches('/')
            )),
            None => Err(StoreError::Config(format!(
                "relative url '{url}' requires a base_url"
            ))),
        }
    }
}

#[async_trait]
impl ConstraintsFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> StoreResult<FetchResponse> {
        let url = self.resolve_url(url)?;
        debug!("Fetching constraints from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Transport(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Constraints request to {} returned {}", url, status);
            return Err(StoreError::Transport(format!("GET {url} returned {status}")));
        }

        let body = response.bytes().await?;
        let data = serde_json::from_slice(&body)
            .map_err(|e| StoreError::InvalidPayload(format!("response of {url} is not JSON: {e}")))?;

        Ok(FetchResponse {
            url,
            status: status.as_u16(),
            data,
        })
    }
}
