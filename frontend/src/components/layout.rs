use crate::{components::toast::ToastViewport, state::auth::use_auth};
use leptos::*;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/department-attendance", "Chấm công phòng ban"),
    ("/chatbot", "Trợ lý AI"),
    ("/profile", "Hồ sơ"),
];

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .filter(|name| !name.is_empty())
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Workforce"</h1>
                    <div class="flex items-center gap-4">
                        <nav class="hidden lg:flex space-x-4">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> })
                                .collect_view()}
                        </nav>
                        {move || user_name().map(|name| view! { <span class="text-sm text-fg-muted">{name}</span> })}
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Đóng menu" } else { "Mở menu" }}
                            </span>
                            {"☰"}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| {
                                    view! {
                                        <a
                                            href=*href
                                            class=format!("block {}", NAV_LINK_CLASS)
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastViewport/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center gap-2 p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|text| view! { <span class="text-sm text-fg-muted">{text}</span> })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
