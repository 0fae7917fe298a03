//! Error types for theme retrieval and configuration.

use thiserror::Error;

/// Errors that can occur while retrieving the theme catalog.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to decode the response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

/// Errors raised while loading [`ThemeApiConfig`](crate::ThemeApiConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A field holds a value the client cannot use.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
