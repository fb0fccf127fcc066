use crate::config::ScraperConfig;

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Transport failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// One outbound request. GET sends `params` in the query string, POST as a form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
    pub method: Method,
}

/// Moves a request over the wire and returns the response body.
///
/// Anything that is not a successful response must come back as an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &FetchRequest) -> Result<String, FetchError>;
}

/// reqwest backed transport. The client keeps its connection pool for the lifetime of the
/// transport, so repeated scrapes reuse connections.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &FetchRequest) -> Result<String, FetchError> {
        let builder = match request.method {
            Method::Get => {
                let url = if request.params.is_empty() {
                    Url::parse(&request.url)
                } else {
                    Url::parse_with_params(&request.url, &request.params)
                }
                .map_err(|e| FetchError::InvalidUrl {
                    url: request.url.clone(),
                    reason: e.to_string(),
                })?;
                self.client.get(url)
            }
            Method::Post => self.client.post(&request.url).form(&request.params),
        };

        Ok(builder.send().await?.error_for_status()?.text().await?)
    }
}

/// Rate limited fetcher shared by every scraper: waits the configured interval, then issues
/// exactly one request.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    rate_limit: Duration,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("rate_limit", &self.rate_limit)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        Ok(Self::with_transport(config, Arc::new(HttpTransport::new()?)))
    }

    pub fn with_transport(config: &ScraperConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            rate_limit: config.rate_limit_duration(),
        }
    }

    pub fn rate_limit(&self) -> Duration {
        self.rate_limit
    }

    pub async fn fetch(
        &self,
        url: &str,
        params: &[(&str, &str)],
        method: Method,
    ) -> Result<String, FetchError> {
        if !self.rate_limit.is_zero() {
            log::debug!("Waiting {:?} before requesting {}", self.rate_limit, url);
            tokio::time::sleep(self.rate_limit).await;
        }

        let request = FetchRequest {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            method,
        };

        self.transport
            .send(&request)
            .await
            .inspect_err(|e| log::error!("Request failed for {}: {}", url, e))
    }
}
