//! Theme API endpoint configuration.

use std::collections::HashMap;

use crate::ConfigError;

/// Default path of the themes endpoint.
pub const DEFAULT_THEMES_PATH: &str = "/api/v1/themes";

/// Where and how to reach the theme API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeApiConfig {
    /// Scheme and host, e.g. `https://api.example.com`.
    pub base_url: String,
    /// Path of the themes endpoint.
    pub themes_path: String,
    /// Extra headers sent with every request.
    pub headers: HashMap<String, String>,
}

impl Default for ThemeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            themes_path: DEFAULT_THEMES_PATH.to_string(),
            headers: HashMap::new(),
        }
    }
}

impl ThemeApiConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Override the endpoint path.
    pub fn with_themes_path(mut self, path: impl Into<String>) -> Self {
        self.themes_path = path.into();
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Reject values the client cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("expected an http(s) URL, got {:?}", self.base_url),
            });
        }
        if !self.themes_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "themes_path",
                reason: "must start with '/'".to_string(),
            });
        }
        Ok(())
    }

    /// Full URL of the themes endpoint.
    pub fn themes_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.themes_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_path() {
        let config = ThemeApiConfig::new("https://api.example.com");
        assert_eq!(config.themes_path, DEFAULT_THEMES_PATH);
        assert_eq!(config.themes_url(), "https://api.example.com/api/v1/themes");
    }

    #[test]
    fn test_config_trailing_slash() {
        let config = ThemeApiConfig::new("https://api.example.com/").with_themes_path("/themes");
        assert_eq!(config.themes_url(), "https://api.example.com/themes");
    }

    #[test]
    fn test_config_rejects_bad_scheme() {
        let err = ThemeApiConfig::new("ftp://cms").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "base_url", .. }));
    }

    #[test]
    fn test_config_rejects_relative_path() {
        let err = ThemeApiConfig::new("https://cms.example.com")
            .with_themes_path("themes")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "themes_path", .. }));
    }

    #[test]
    fn test_config_with_header() {
        let config = ThemeApiConfig::default().with_header("Authorization", "Bearer t");
        assert_eq!(config.headers.len(), 1);
        assert!(config.validate().is_ok());
    }
}
