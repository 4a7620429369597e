pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

#[cfg(target_arch = "wasm32")]
static STARTED: std::sync::Once = std::sync::Once::new();

/// Browser entry point. Safe to call more than once; only the first call
/// mounts the app.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    STARTED.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        log::info!("Starting Workforce frontend");

        // Config loads in the background; API calls wait for the base URL.
        leptos::spawn_local(async move {
            config::init().await;
            log::info!("Runtime config initialized");
        });

        router::mount_app();
    });
}
