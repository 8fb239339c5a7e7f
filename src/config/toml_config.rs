use crate::config::{CatalogConfig, DEFAULT_FERMENTABLES_URL, DEFAULT_HOPS_URL, DEFAULT_YEASTS_URL};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File-based configuration:
///
/// ```toml
/// [endpoints]
/// hops = "http://localhost:4000/api/hops"
/// fermentables = "http://localhost:4000/api/fermentables"
/// yeasts = "${YEASTS_URL}"
///
/// [http]
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_hops_url")]
    pub hops: String,
    #[serde(default = "default_fermentables_url")]
    pub fermentables: String,
    #[serde(default = "default_yeasts_url")]
    pub yeasts: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

fn default_hops_url() -> String {
    DEFAULT_HOPS_URL.to_string()
}

fn default_fermentables_url() -> String {
    DEFAULT_FERMENTABLES_URL.to_string()
}

fn default_yeasts_url() -> String {
    DEFAULT_YEASTS_URL.to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            hops: default_hops_url(),
            fermentables: default_fermentables_url(),
            yeasts: default_yeasts_url(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn to_catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            hops_url: self.endpoints.hops.clone(),
            fermentables_url: self.endpoints.fermentables.clone(),
            yeasts_url: self.endpoints.yeasts.clone(),
            timeout_seconds: self.http.timeout_seconds,
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn hops_url(&self) -> &str {
        &self.endpoints.hops
    }

    fn fermentables_url(&self) -> &str {
        &self.endpoints.fermentables
    }

    fn yeasts_url(&self) -> &str {
        &self.endpoints.yeasts
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.http.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_catalog_config().validate()
    }
}
