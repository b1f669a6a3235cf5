use leptos::*;

rust_i18n::i18n!("locales", fallback = "en");

mod api;
mod components;
pub mod config;
pub mod i18n;
mod pages;
pub mod router;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the router.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::info!("Starting Account Portal frontend");

    // window.__ACCOUNT_PORTAL_ENV (env.js) takes precedence over ./config.json.
    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized (locale: {})", config::locale());
        router::mount_app();
    });
}
