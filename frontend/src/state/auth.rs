use crate::api::{ApiClient, ApiError, CurrentUser};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Session as seen by the UI. `loading` is true until `/auth/me` answers.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn checking() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().and_then(CurrentUser::identifier)
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth, set_auth) = create_signal(AuthState::checking());
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        if let Err(err) = refresh_auth_state(&api, set_auth).await {
            log::info!("[auth] no active session: {}", err);
        }
    });
    provide_context::<AuthContext>((auth, set_auth));
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::signed_out()))
}

pub async fn refresh_auth_state(
    api: &ApiClient,
    set_auth: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth.update(|state| state.loading = true);
    let result = api.get_me().await;
    set_auth.set(match &result {
        Ok(user) => AuthState::signed_in(user.clone()),
        Err(_) => AuthState::signed_out(),
    });
    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn user_id_prefers_mongo_id() {
        let state = AuthState::signed_in(crate::test_support::helpers::sample_user(None));
        assert_eq!(state.user_id(), Some("64f0c0ffee0000000000a001"));
        assert!(state.is_authenticated);
        assert_eq!(AuthState::signed_out().user_id(), None);
        assert!(AuthState::checking().loading);
    }
}
