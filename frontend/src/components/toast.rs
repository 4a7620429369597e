use leptos::*;

use crate::state::toast::{use_toasts, ToastLevel};

fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => {
            "bg-status-success-bg border border-status-success-border text-status-success-text"
        }
        ToastLevel::Error => {
            "bg-status-error-bg border border-status-error-border text-status-error-text"
        }
        ToastLevel::Info => {
            "bg-status-info-bg border border-status-info-border text-status-info-text"
        }
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let store = use_toasts();
    let toasts = store.toasts();

    view! {
        <div
            class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]"
            aria-live="polite"
        >
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let role = if toast.level == ToastLevel::Error { "alert" } else { "status" };
                    view! {
                        <div
                            class=format!("flex items-start justify-between gap-3 rounded-md px-4 py-3 shadow {}", toast_class(toast.level))
                            role=role
                        >
                            <p class="text-sm">{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Đóng"
                                class="text-sm opacity-70 hover:opacity-100"
                                on:click=move |_| store.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
