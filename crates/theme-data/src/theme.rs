//! Theme catalog wire types.

use serde::{Deserialize, Serialize};

/// One visual theme variant as served by the theme API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub key: String,
    pub background_color: String,
    pub label: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ThemeRecord {
    pub fn new(
        key: impl Into<String>,
        background_color: impl Into<String>,
        label: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            background_color: background_color.into(),
            label: label.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Payload of the themes endpoint: `{ "themes": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    pub themes: Vec<ThemeRecord>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<ThemeRecord>) -> Self {
        Self { themes }
    }
}

impl From<Vec<ThemeRecord>> for ThemeCatalog {
    fn from(themes: Vec<ThemeRecord>) -> Self {
        Self { themes }
    }
}
