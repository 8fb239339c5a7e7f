use crate::domain::ports::Transport;
use crate::utils::error::{CatalogError, FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// reqwest-backed [`Transport`]. Without a timeout a hung request waits forever.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CatalogError::ConfigError {
            message: format!("failed to build HTTP client: {}", e),
        })?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> std::result::Result<serde_json::Value, FetchError> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(FetchError::transport(url, format!("HTTP status {}", status)));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }
}
