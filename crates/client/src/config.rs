//! Client configuration.

use std::time::Duration;

use crate::error::ApiError;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "STOCKROOM_API_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the warehouse API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout applied to the underlying HTTP client.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the base URL from `STOCKROOM_API_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var(API_URL_ENV)
            .map_err(|_| ApiError::Config(format!("{API_URL_ENV} is not set")))?;
        Ok(Self::new(base_url))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
