use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, layout::Layout},
    pages::{
        chatbot::ChatbotPage, department_attendance::DepartmentAttendancePage, login::LoginPage,
        profile::ProfilePage,
    },
    state::{auth::AuthProvider, chatbot::provide_chatbot, toast::provide_toasts},
};

pub const HOME_REDIRECT: &str = "/department-attendance";

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/department-attendance", "/chatbot", "/profile"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/department-attendance", "/chatbot", "/profile"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toasts();
    provide_chatbot();
    view! {
        <Title formatter=|text: String| {
            if text.is_empty() { "Workforce".to_string() } else { format!("{} | Workforce", text) }
        }/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomeRedirect/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/department-attendance" view=ProtectedDepartmentAttendance/>
                    <Route path="/chatbot" view=ProtectedChatbot/>
                    <Route path="/profile" view=ProtectedProfile/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path=HOME_REDIRECT/> }
}

/// Guarded page inside the app chrome.
#[component]
fn ProtectedPage(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let children = store_value(children);
    view! {
        <Title text=title/>
        <RequireAuth>
            <Layout>{children.with_value(|children| children())}</Layout>
        </RequireAuth>
    }
}

#[component]
fn ProtectedDepartmentAttendance() -> impl IntoView {
    view! { <ProtectedPage title="Chấm công phòng ban"><DepartmentAttendancePage/></ProtectedPage> }
}

#[component]
fn ProtectedChatbot() -> impl IntoView {
    view! { <ProtectedPage title="Trợ lý AI"><ChatbotPage/></ProtectedPage> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <ProtectedPage title="Hồ sơ"><ProfilePage/></ProtectedPage> }
}
