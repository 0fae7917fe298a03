//! View state for one fetch cycle.

use serde::{Deserialize, Serialize};
use theme_data::ThemeRecord;

/// Why a fetch cycle ended without a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// The key is absent from the retrieved list.
    NotFound,
    /// Retrieval itself failed.
    FetchError,
}

impl FailureReason {
    /// User-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Theme not found",
            Self::FetchError => "Error fetching themes",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Exactly one of loading, failed or ready.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Loading,
    Failed(FailureReason),
    Ready(ThemeRecord),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Ready or Failed.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn record(&self) -> Option<&ThemeRecord> {
        match self {
            Self::Ready(record) => Some(record),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<FailureReason> {
        match self {
            Self::Failed(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// First record whose key equals `theme_key`.
pub fn select_theme<'a>(themes: &'a [ThemeRecord], theme_key: &str) -> Option<&'a ThemeRecord> {
    themes.iter().find(|theme| theme.key == theme_key)
}

/// Terminal state for a completed retrieval.
pub fn resolve<E>(result: Result<Vec<ThemeRecord>, E>, theme_key: &str) -> ViewState {
    match result {
        Ok(themes) => match select_theme(&themes, theme_key) {
            Some(record) => ViewState::Ready(record.clone()),
            None => ViewState::Failed(FailureReason::NotFound),
        },
        Err(_) => ViewState::Failed(FailureReason::FetchError),
    }
}
