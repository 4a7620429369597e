use leptos::*;

use super::utils::{profile_fields, project_role, ProfileRole};
use crate::{
    components::{
        badge::{Badge, BadgeTone},
        empty_state::EmptyState,
    },
    state::auth::use_auth,
    utils::format::initials,
};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let user = create_memo(move |_| auth.get().user);

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-fg">"Hồ sơ cá nhân"</h1>
            {move || match user.get() {
                None => view! { <EmptyState title="Chưa có thông tin" /> }.into_view(),
                Some(user) => {
                    let role = project_role(user.role.as_deref());
                    let tone = match role {
                        ProfileRole::Admin => BadgeTone::Primary,
                        ProfileRole::Employee => BadgeTone::Outline,
                    };
                    let fields = profile_fields(&user);
                    view! {
                        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-6">
                            <div class="flex items-center gap-4">
                                <div class="h-16 w-16 rounded-full bg-surface-muted flex items-center justify-center text-xl font-semibold text-fg">
                                    {initials(&user.name)}
                                </div>
                                <div class="space-y-1">
                                    <p class="text-xl font-semibold text-fg">{user.name.clone()}</p>
                                    <Badge label=role.label() tone=tone />
                                </div>
                            </div>
                            <dl class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {fields
                                    .into_iter()
                                    .map(|field| view! {
                                        <div class="rounded-md border border-border p-4">
                                            <dt class="text-sm text-fg-muted">{field.label}</dt>
                                            <dd class="mt-1 text-sm font-medium text-fg">{field.value}</dd>
                                        </div>
                                    })
                                    .collect_view()}
                            </dl>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
