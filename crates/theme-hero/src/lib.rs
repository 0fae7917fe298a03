//! Theme hero section.
//!
//! Fetches the theme catalog, selects one theme by key and renders a hero
//! banner for it, with loading and error states.
//!
//! # Example
//!
//! ```rust,ignore
//! use theme_hero::prelude::*;
//!
//! #[component]
//! fn ThemePage() -> impl IntoView {
//!     provide_theme_source(StaticThemeSource::new(themes()));
//!     view! { <ThemeHeroSection theme_key="dark"/> }
//! }
//! ```

mod component;
mod controller;
mod layout;
mod state;
mod view;

pub use component::*;
pub use controller::*;
pub use layout::*;
pub use state::*;
pub use view::*;

pub use theme_data;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        hero_view, provide_theme_source, render_theme_hero, Container, HeroView, ThemeFetchController,
        ThemeHeroSection, ViewState,
    };
    pub use theme_data::{HttpThemeSource, StaticThemeSource, ThemeRecord, ThemeSource};
}
