use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal shell shared by the detail and edit dialogs. Escape, the close
/// button and a backdrop click all invoke `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_class = if wide {
        "relative z-[71] w-full max-w-6xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    } else {
        "relative z-[71] w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
    };
    let children = store_value(children);
    let title = Signal::derive(move || title.get());
    let description = Signal::derive(move || description.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Đóng"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=panel_class
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <div class="space-y-1">
                            <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                            {move || {
                                let text = description.get();
                                (!text.is_empty())
                                    .then(|| view! { <p class="text-sm text-fg-muted">{text}</p> })
                            }}
                        </div>
                        <button
                            type="button"
                            aria-label="Đóng"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
