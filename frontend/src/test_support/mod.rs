#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::CurrentUser;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn sample_user(role: Option<&str>) -> CurrentUser {
        CurrentUser {
            mongo_id: Some("64f0c0ffee0000000000a001".into()),
            id: None,
            name: "Nguyễn Thị Lan".into(),
            email: "lan.nguyen@example.com".into(),
            role: role.map(str::to_string),
            department: Some("d-eng".into()),
            phone: Some("0901 234 567".into()),
            position: Some("HR Specialist".into()),
        }
    }

    pub fn provide_auth(
        user: Option<CurrentUser>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(
            user.map(AuthState::signed_in)
                .unwrap_or_else(AuthState::signed_out),
        );
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
