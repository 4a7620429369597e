use crate::{
    api::client::redirect_to_login,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gate {
    Checking,
    Allowed,
    Denied,
}

fn gate_for(state: &AuthState) -> Gate {
    if state.loading {
        Gate::Checking
    } else if state.is_authenticated {
        Gate::Allowed
    } else {
        Gate::Denied
    }
}

/// Renders `children` only for a signed-in session; a settled signed-out
/// session is sent to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let gate = create_memo(move |_| auth.with(gate_for));
    create_effect(move |_| {
        if gate.get() == Gate::Denied {
            redirect_to_login();
        }
    });
    view! {
        <Show
            when=move || gate.get() == Gate::Allowed
            fallback=move || {
                (gate.get() == Gate::Checking)
                    .then(|| view! { <LoadingSpinner label="Đang kiểm tra phiên đăng nhập..." /> })
            }
        >
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn guarded() -> impl IntoView {
        view! {
            <RequireAuth>
                {|| view! { <div>"protected-content"</div> }}
            </RequireAuth>
        }
    }

    #[test]
    fn renders_children_for_signed_in_user() {
        let html = render_to_string(|| {
            provide_auth(Some(sample_user(Some("MANAGER"))));
            guarded()
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn hides_children_when_signed_out() {
        let html = render_to_string(|| {
            provide_auth(None);
            guarded()
        });
        assert!(!html.contains("protected-content"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn shows_spinner_while_session_is_checked() {
        let html = render_to_string(|| {
            provide_context(create_signal(AuthState::checking()));
            guarded()
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Đang kiểm tra phiên đăng nhập..."));
    }
}
