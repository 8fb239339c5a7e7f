#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_HOPS_URL: &str = "http://localhost:4000/api/hops";
pub const DEFAULT_FERMENTABLES_URL: &str = "http://localhost:4000/api/fermentables";
pub const DEFAULT_YEASTS_URL: &str = "http://localhost:4000/api/yeasts";

/// Resolved endpoint settings. Defaults point at a local development API.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub hops_url: String,
    pub fermentables_url: String,
    pub yeasts_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            hops_url: DEFAULT_HOPS_URL.to_string(),
            fermentables_url: DEFAULT_FERMENTABLES_URL.to_string(),
            yeasts_url: DEFAULT_YEASTS_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ConfigProvider for CatalogConfig {
    fn hops_url(&self) -> &str {
        &self.hops_url
    }

    fn fermentables_url(&self) -> &str {
        &self.fermentables_url
    }

    fn yeasts_url(&self) -> &str {
        &self.yeasts_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_url("hops_url", &self.hops_url)?;
        validate_url("fermentables_url", &self.fermentables_url)?;
        validate_url("yeasts_url", &self.yeasts_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
