use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// Performs a GET against a URL and yields the decoded JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}

pub trait ConfigProvider: Send + Sync {
    fn hops_url(&self) -> &str;
    fn fermentables_url(&self) -> &str;
    fn yeasts_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
