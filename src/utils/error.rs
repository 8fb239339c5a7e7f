use std::fmt;
use thiserror::Error;

/// Which side of a fetch went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection failure, timeout or non-success HTTP status.
    Transport,
    /// Body is not JSON or does not have the expected shape.
    Parse,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::Transport => write!(f, "transport"),
            FetchErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Failure of a single collection fetch.
///
/// Callers see one error type regardless of cause; `kind` is kept for
/// diagnostics only.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to fetch {endpoint}: {message}")]
pub struct FetchError {
    pub endpoint: String,
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            kind: FetchErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn parse(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            kind: FetchErrorKind::Parse,
            message: message.into(),
        }
    }

    pub fn from_reqwest(endpoint: &str, error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::parse(endpoint, format!("invalid JSON body: {}", error))
        } else if error.is_timeout() {
            Self::transport(endpoint, "request timed out")
        } else {
            Self::transport(endpoint, error.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Record error: {0}")]
    Record(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::Fetch(e) => format!("Could not load catalog data from {}", e.endpoint),
            CatalogError::Record(_) => "A catalog record had an unexpected shape".to_string(),
            CatalogError::IoError(e) => format!("File access failed: {}", e),
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::Fetch(e) if e.kind == FetchErrorKind::Transport => {
                "Check that the catalog API is running and the endpoint URL is correct"
            }
            CatalogError::Fetch(_) | CatalogError::Record(_) => {
                "Check that the endpoint serves a JSON array of catalog records"
            }
            CatalogError::IoError(_) => "Check that the file exists and is readable",
            CatalogError::ConfigError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                "Review the endpoint settings in the config file or command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
