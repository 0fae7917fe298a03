//! Theme showcase site.
//!
//! Mounts the theme hero section on `/themes/:key`, with:
//! - Streaming SSR on Spin/WASI
//! - `get_themes` server function backed by the theme API or a built-in catalog
//! - Client-side hydration

mod app;

#[cfg(feature = "ssr")]
mod server;

pub use app::{builtin_catalog, App, ServerFnThemeSource};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
