//! Theme catalog access for the theme hero view.
//!
//! Provides the wire types served by the theme API, an HTTP client for Spin
//! WASM components, and the [`ThemeSource`] abstraction the view controller
//! fetches through.
//!
//! # Example
//!
//! ```rust,ignore
//! use theme_data::{HttpThemeSource, ThemeApiConfig, ThemeSource};
//!
//! let config = ThemeApiConfig::new("https://cms.example.com");
//! let source = HttpThemeSource::new(&config)?;
//! let themes = source.fetch_themes().await?;
//! ```

mod config;
mod error;
mod request;
mod response;
mod source;
mod theme;

pub use config::{ThemeApiConfig, DEFAULT_THEMES_PATH};
pub use error::{ConfigError, FetchError};
pub use request::RequestBuilder;
pub use response::Response;
pub use source::{HttpThemeSource, StaticThemeSource, ThemeSource};
pub use theme::{ThemeCatalog, ThemeRecord};

use std::collections::HashMap;

/// HTTP client for outbound requests to the theme API.
///
/// Holds the base URL and the headers attached to every request.
#[derive(Debug, Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client from endpoint configuration.
    pub fn from_config(config: &ThemeApiConfig) -> Self {
        let mut client = Self::new().with_base_url(config.base_url.clone());
        for (key, value) in &config.headers {
            client = client.with_default_header(key.clone(), value.clone());
        }
        client
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url.to_string(),
        }
    }

    /// Create a GET request.
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::get(self.resolve(url)).headers(self.default_headers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_resolve_relative() {
        let client = FetchClient::new().with_base_url("https://api.example.com/");
        assert_eq!(client.resolve("/api/v1/themes"), "https://api.example.com/api/v1/themes");
    }

    #[test]
    fn test_client_resolve_absolute_passthrough() {
        let client = FetchClient::new().with_base_url("https://api.example.com");
        assert_eq!(client.resolve("https://other.example.com/x"), "https://other.example.com/x");
    }

    #[test]
    fn test_client_without_base_url() {
        assert_eq!(FetchClient::default().resolve("/themes"), "/themes");
    }

    #[test]
    fn test_client_default_headers_applied() {
        let config = ThemeApiConfig::new("https://api.example.com").with_header("X-Api-Key", "k");
        let request = FetchClient::from_config(&config).get("/themes");
        assert_eq!(request.header_value("X-Api-Key"), Some("k"));
        assert_eq!(request.url(), "https://api.example.com/themes");
    }
}
