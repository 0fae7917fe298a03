//! Data sources that supply the full theme list.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{ConfigError, FetchClient, FetchError, ThemeApiConfig, ThemeCatalog, ThemeRecord};

/// Supplies the ordered list of all themes.
///
/// Implementations must not cache or retry; every call is one retrieval.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    /// Retrieve every theme record, in the order the backend returns them.
    async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError>;
}

#[async_trait]
impl<T: ThemeSource + ?Sized> ThemeSource for Arc<T> {
    async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
        (**self).fetch_themes().await
    }
}

/// Reads the catalog from the theme API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpThemeSource {
    client: FetchClient,
    url: String,
}

impl HttpThemeSource {
    /// Build a source from a validated configuration.
    pub fn new(config: &ThemeApiConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            client: FetchClient::from_config(config),
            url: config.themes_url(),
        })
    }

    /// Full URL that [`fetch_themes`](ThemeSource::fetch_themes) requests.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ThemeSource for HttpThemeSource {
    async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
        let request = self.client.get(&self.url).accept("application/json");
        tracing::debug!(url = request.url(), "requesting theme catalog");

        let response = request.send().await?.error_for_status()?;
        tracing::debug!(
            status = response.status,
            content_type = response.header("content-type").unwrap_or("-"),
            "theme catalog received"
        );

        let catalog: ThemeCatalog = response.json()?;
        Ok(catalog.themes)
    }
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticThemeSource {
    themes: Arc<Vec<ThemeRecord>>,
}

impl StaticThemeSource {
    pub fn new(themes: Vec<ThemeRecord>) -> Self {
        Self {
            themes: Arc::new(themes),
        }
    }

    /// Parse a `{ "themes": [...] }` JSON document.
    pub fn from_json(raw: &str) -> Result<Self, FetchError> {
        let catalog: ThemeCatalog = serde_json::from_str(raw)?;
        Ok(Self::new(catalog.themes))
    }

    pub fn themes(&self) -> &[ThemeRecord] {
        &self.themes
    }
}

#[async_trait]
impl ThemeSource for StaticThemeSource {
    async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
        Ok(self.themes.as_ref().clone())
    }
}
