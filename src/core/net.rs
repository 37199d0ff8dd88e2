// src/core/net.rs
//
// HTTP GET behind a small async trait so the scrape layer can be driven by
// a real client or by an in-memory site in tests.

use async_trait::async_trait;
use tracing::debug;

use crate::config::options::HttpOptions;
use crate::error::{Error, Result};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Anything that can turn a URL into a page body.
/// Non-success statuses are errors; the body is only returned for 2xx.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<String, FetchError>;
}

/// reqwest-backed fetcher. One connection pool per run.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(opts: &HttpOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpClient {
    async fn get(&self, url: &str) -> std::result::Result<String, FetchError> {
        debug!(url, "GET");
        let transport = |source| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().await.map_err(transport)
    }
}
