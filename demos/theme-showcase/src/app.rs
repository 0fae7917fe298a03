//! Application components, pages and server functions.

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::server_fn::error::ServerFnError;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use theme_data::{FetchError, ThemeCatalog, ThemeRecord, ThemeSource};
use theme_hero::{provide_theme_source, ThemeHeroSection};

// ============================================================================
// Data Source
// ============================================================================

/// Fetches themes through the `get_themes` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnThemeSource;

#[async_trait]
impl ThemeSource for ServerFnThemeSource {
    async fn fetch_themes(&self) -> Result<Vec<ThemeRecord>, FetchError> {
        get_themes()
            .await
            .map(|catalog| catalog.themes)
            .map_err(|e| FetchError::RequestError(e.to_string()))
    }
}

/// Catalog served when no upstream theme API is configured.
pub fn builtin_catalog() -> ThemeCatalog {
    ThemeCatalog::new(vec![
        ThemeRecord::new("dark", "#1b1b1f", "Mode", "Dark Theme")
            .with_description("Easy on eyes"),
        ThemeRecord::new("light", "#4684e9", "Mode", "Light Theme"),
        ThemeRecord::new("gift-birthday", "#e4572e", "Occasion", "Birthday gifts for someone special")
            .with_description("Pick something they will remember"),
    ])
}

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos::view;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme_source(ServerFnThemeSource);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/theme_showcase.css"/>
        <Meta name="description" content="Theme hero showcase"/>
        <Title text="Themes"/>

        <Router>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/themes/:key") view=ThemePage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Index of every theme in the catalog.
#[component]
fn HomePage() -> impl IntoView {
    let catalog = Resource::new(|| (), |_| get_themes());

    view! {
        <h2>"Themes"</h2>
        <leptos::suspense::Suspense fallback=move || view! { <p>"Loading..."</p> }>
            {move || catalog.get().map(|result| match result {
                Ok(catalog) => view! {
                    <ul class="theme-list">
                        {catalog.themes.into_iter().map(|theme| {
                            let href = format!("/themes/{}", theme.key);
                            view! { <li><a href=href>{theme.title}</a></li> }
                        }).collect::<Vec<_>>()}
                    </ul>
                }.into_any(),
                Err(e) => view! {
                    <p style="color: red;">"Error loading themes: " {e.to_string()}</p>
                }.into_any(),
            })}
        </leptos::suspense::Suspense>
    }
}

/// Hero banner for the theme in the URL.
#[component]
fn ThemePage() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();
    let key = Signal::derive(move || params.get().get("key").unwrap_or_default());

    view! {
        <ThemeHeroSection theme_key=key/>
        <a href="/">"All themes"</a>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}

// ============================================================================
// Server Functions (API)
// ============================================================================

/// Get every theme, from the upstream theme API when `themes_api_url` is set.
///
/// `themes_api_path` overrides the endpoint path.
#[leptos::server(prefix = "/api")]
pub async fn get_themes() -> Result<ThemeCatalog, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        use theme_data::{HttpThemeSource, ThemeApiConfig};

        let Ok(base_url) = spin_sdk::variables::get("themes_api_url") else {
            tracing::debug!("themes_api_url not set, serving built-in catalog");
            return Ok(builtin_catalog());
        };

        let mut config = ThemeApiConfig::new(base_url);
        if let Ok(path) = spin_sdk::variables::get("themes_api_path") {
            config = config.with_themes_path(path);
        }
        let source = HttpThemeSource::new(&config)
            .map_err(|e| ServerFnError::new(format!("Config error: {}", e)))?;
        let themes = source
            .fetch_themes()
            .await
            .map_err(|e| ServerFnError::new(format!("Upstream error: {}", e)))?;

        Ok(ThemeCatalog::new(themes))
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
