//! Sign-in lives in the HR portal; this route only explains where to go and
//! offers a way back once a session exists.

use leptos::*;

use crate::state::auth::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let signed_in = create_memo(move |_| auth.with(|state| state.is_authenticated));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="max-w-md w-full bg-surface-elevated border border-border rounded-lg shadow-sm p-8 space-y-4 text-center">
                <h1 class="text-2xl font-semibold text-fg">"Đăng nhập"</h1>
                <Show
                    when=move || signed_in.get()
                    fallback=|| {
                        view! {
                            <p class="text-sm text-fg-muted">
                                "Phiên làm việc đã hết hạn. Vui lòng đăng nhập lại qua cổng nhân sự."
                            </p>
                        }
                    }
                >
                    <p class="text-sm text-fg-muted">"Bạn đã đăng nhập."</p>
                    <a
                        href="/department-attendance"
                        class="inline-flex items-center px-4 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    >
                        "Tiếp tục"
                    </a>
                </Show>
            </div>
        </div>
    }
}
