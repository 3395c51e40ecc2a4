//! Transport-level error model.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error raised by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 404 for the requested resource.
    #[error("resource not found")]
    NotFound,

    /// The server answered a non-success status other than 404.
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Network-level failure (connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The client could not be configured (missing base URL, bad timeout).
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
