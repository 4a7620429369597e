use leptos::*;

use crate::{
    api::ApiClient,
    state::toast::{provide_toasts, ToastStore},
    test_support::helpers::{provide_auth, sample_user},
};

/// Runs `f` inside a throwaway reactive runtime.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Server-renders `view` with resource fetchers suppressed, so pages render
/// their loading state without touching the network.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Provides what the app shell normally provides: an API client for
/// `base_url`, a toast store and a signed-in user with `role`.
pub fn provide_app_context(base_url: &str, role: Option<&str>) -> ToastStore {
    provide_context(ApiClient::new_with_base_url(base_url));
    provide_auth(Some(sample_user(role)));
    provide_toasts()
}

/// `render_to_string` with `provide_app_context` applied first.
pub fn render_signed_in<F, N>(role: Option<&'static str>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_app_context("http://localhost:0/api", role);
        view()
    })
}
