use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where the quiz backend lives and how long to wait for it.
///
/// Quiz generation scrapes and calls a model, so the default timeout is
/// generous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` unless `base_url` is an absolute
    /// http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&trimmed).map_err(|_| ApiError::InvalidBaseUrl(raw.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(raw));
        }
        Ok(Self {
            base_url: trimmed,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Read `WIKIQUIZ_API_URL` and `WIKIQUIZ_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the configured URL is unusable.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var("WIKIQUIZ_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        let timeout_secs = env::var("WIKIQUIZ_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self::new(base_url)?.with_timeout(Duration::from_secs(timeout_secs)))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for an endpoint path such as `/quiz/generate`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
