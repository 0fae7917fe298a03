//! Leptos components for the theme hero section.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Style;
use theme_data::ThemeSource;

use crate::controller::ThemeFetchController;
use crate::layout::hero_stylesheet;
use crate::state::ViewState;
use crate::view::{HeroView, LOADING_TEXT};

/// The theme source shared by every hero section under a provider.
#[derive(Clone)]
pub struct ThemeSourceContext(pub Arc<dyn ThemeSource>);

/// Make `source` available to [`ThemeHeroSection`] descendants.
pub fn provide_theme_source(source: impl ThemeSource + 'static) {
    provide_context(ThemeSourceContext(Arc::new(source)));
}

/// Passive page-width wrapper.
#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! { <div class="container">{children()}</div> }
}

/// Hero banner for the theme identified by `theme_key`.
///
/// A new fetch cycle starts whenever the key changes; responses for
/// superseded keys are ignored.
#[component]
pub fn ThemeHeroSection(#[prop(into)] theme_key: Signal<String>) -> impl IntoView {
    let ThemeSourceContext(source) = expect_context::<ThemeSourceContext>();
    let controller = ThemeFetchController::new(source);
    let state = Resource::new(
        move || theme_key.get(),
        move |key| {
            let controller = controller.clone();
            async move { controller.load_latest(&key).await }
        },
    );

    view! {
        <Style id="theme-hero">{hero_stylesheet()}</Style>
        <leptos::suspense::Suspense fallback=move || hero_view(ViewState::Loading)>
            {move || state.get().map(hero_view)}
        </leptos::suspense::Suspense>
    }
}

/// Draw one view state.
pub fn hero_view(state: ViewState) -> AnyView {
    match HeroView::from_state(&state) {
        HeroView::Loading => view! {
            <div class="theme-hero-loading">{LOADING_TEXT}</div>
        }.into_any(),
        HeroView::Error { message } => view! {
            <div class="theme-hero-error" role="alert">{message}</div>
        }.into_any(),
        HeroView::Hero(content) => {
            let background = format!("background-color: {}", content.background_color);
            view! {
                <section class="theme-hero" style=background>
                    <Container>
                        <p class="theme-hero-label">{content.label}</p>
                        <h1 class="theme-hero-title">{content.title}</h1>
                        {content.description.map(|description| view! {
                            <p class="theme-hero-description">{description}</p>
                        })}
                    </Container>
                </section>
            }.into_any()
        }
    }
}
