//! Render projection and server-side HTML for the hero section.

use crate::state::ViewState;

/// Text shown while a cycle is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Content of a ready hero banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub background_color: String,
    pub label: String,
    pub title: String,
    pub description: Option<String>,
}

/// What the presentation layer draws for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroView {
    Loading,
    Error { message: &'static str },
    Hero(HeroContent),
}

impl HeroView {
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Loading => Self::Loading,
            ViewState::Failed(reason) => Self::Error {
                message: reason.message(),
            },
            ViewState::Ready(record) => Self::Hero(HeroContent {
                background_color: record.background_color.clone(),
                label: record.label.clone(),
                title: record.title.clone(),
                description: record.description.clone(),
            }),
        }
    }
}

impl From<&ViewState> for HeroView {
    fn from(state: &ViewState) -> Self {
        Self::from_state(state)
    }
}

/// Render the hero section as an HTML fragment.
pub fn render_theme_hero(view: &HeroView) -> String {
    match view {
        HeroView::Loading => format!(
            r#"<div class="theme-hero-loading" data-section="theme-hero">{}</div>"#,
            LOADING_TEXT
        ),
        HeroView::Error { message } => format!(
            r#"<div class="theme-hero-error" data-section="theme-hero" role="alert">{}</div>"#,
            html_escape(message)
        ),
        HeroView::Hero(content) => {
            let description = content
                .description
                .as_deref()
                .map(|text| {
                    format!(
                        "\n        <p class=\"theme-hero-description\">{}</p>",
                        html_escape(text)
                    )
                })
                .unwrap_or_default();

            format!(
                r#"<section class="theme-hero" data-section="theme-hero" style="background-color: {}">
    <div class="container">
        <p class="theme-hero-label">{}</p>
        <h1 class="theme-hero-title">{}</h1>{}
    </div>
</section>"#,
                html_escape(&content.background_color),
                html_escape(&content.label),
                html_escape(&content.title),
                description
            )
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
