use std::rc::Rc;

use leptos::*;

use super::{
    repository::AttendanceDetailRepository,
    utils::{AttendanceWindow, EmployeeAttendanceRow},
};
use crate::{
    api::ApiClient,
    state::toast::{use_toasts, ToastStore},
    utils::{time::today_in_app_tz, RequestToken},
};

const RECORDS_FAILED: &str = "Không thể tải dữ liệu chấm công";

#[derive(Clone, Copy)]
pub struct AttendanceDetailViewModel {
    pub rows: RwSignal<Vec<EmployeeAttendanceRow>>,
    pub loading: RwSignal<bool>,
    pub window: RwSignal<AttendanceWindow>,
    token: StoredValue<RequestToken>,
    repository: StoredValue<AttendanceDetailRepository>,
    toasts: ToastStore,
}

impl AttendanceDetailViewModel {
    pub fn new(repository: AttendanceDetailRepository, toasts: ToastStore) -> Self {
        Self {
            rows: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            window: create_rw_signal(AttendanceWindow::ending_on(today_in_app_tz())),
            token: store_value(RequestToken::new()),
            repository: store_value(repository),
            toasts,
        }
    }

    /// Drops whatever is in flight and empties the table.
    pub fn reset(&self) {
        self.token.with_value(RequestToken::invalidate);
        self.rows.set(Vec::new());
        self.loading.set(false);
    }

    /// Re-resolves `department_name` and fetches the last week. Only the most
    /// recently started load may touch the table.
    pub async fn load(self, department_name: String) {
        let window = AttendanceWindow::ending_on(today_in_app_tz());
        self.window.set(window);
        let token = self.token.get_value();
        let ticket = token.issue();
        self.loading.set(true);
        let repository = self.repository.get_value();
        let result = repository.load(&department_name, window).await;
        if !token.is_current(ticket) {
            return;
        }
        match result {
            Ok(rows) => self.rows.set(rows),
            Err(err) => {
                log::warn!("[attendance-detail] {}: {}", department_name, err);
                self.rows.set(Vec::new());
                self.toasts.error(err.user_message(RECORDS_FAILED));
            }
        }
        self.loading.set(false);
    }
}

pub fn use_attendance_detail_view_model(
    is_open: Signal<bool>,
    department_name: Signal<String>,
) -> AttendanceDetailViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = AttendanceDetailViewModel::new(
        AttendanceDetailRepository::new_with_client(Rc::new(api)),
        use_toasts(),
    );

    create_effect(move |_| {
        let open = is_open.get();
        let name = department_name.get();
        if !open || name.is_empty() {
            vm.reset();
            return;
        }
        spawn_local(vm.load(name));
    });

    vm
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use std::time::Duration;

    use super::*;
    use crate::state::toast::ToastStore;
    use httpmock::prelude::*;
    use serde_json::json;

    async fn mock_department(server: &MockServer, id: &str, performer: &str, delay_ms: u64) {
        let employees_path = format!("/api/departments/{}/employees", id);
        server
            .mock_async(|when, then| {
                when.method(GET).path(employees_path);
                then.status(200)
                    .delay(Duration::from_millis(delay_ms))
                    .json_body(json!({ "employees": [] }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/attendance/analytics")
                    .query_param("department", id);
                then.status(200).json_body(json!({
                    "topPerformers": [{ "name": performer, "onTime": 1, "late": 0, "absent": 0 }]
                }));
            })
            .await;
    }

    fn view_model(server: &MockServer, toasts: ToastStore) -> AttendanceDetailViewModel {
        let api = ApiClient::new_with_base_url(server.url("/api"));
        AttendanceDetailViewModel::new(AttendanceDetailRepository::new_with_client(Rc::new(api)), toasts)
    }

    #[tokio::test]
    async fn superseded_load_does_not_overwrite_latest_rows() {
        let server = MockServer::start_async().await;
        let departments = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/departments");
                then.status(200).json_body(json!({
                    "departments": [
                        { "_id": "d-ops", "name": "Operations" },
                        { "_id": "d-eng", "name": "Engineering" }
                    ]
                }));
            })
            .await;
        mock_department(&server, "d-ops", "Slow Ops", 300).await;
        mock_department(&server, "d-eng", "Fast Eng", 0).await;

        let runtime = create_runtime();
        let vm = view_model(&server, ToastStore::new());
        tokio::join!(vm.load("Operations".into()), vm.load("Engineering".into()));

        let names: Vec<String> = vm.rows.get_untracked().into_iter().map(|row| row.name).collect();
        assert_eq!(names, vec!["Fast Eng".to_string()]);
        assert!(!vm.loading.get_untracked());
        departments.assert_hits_async(2).await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn reopening_resolves_again_and_failure_clears_rows() {
        let server = MockServer::start_async().await;
        let departments = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/departments");
                then.status(200).json_body(json!({
                    "departments": [{ "_id": "d-eng", "name": "Engineering" }]
                }));
            })
            .await;
        mock_department(&server, "d-eng", "An", 0).await;

        let runtime = create_runtime();
        let toasts = ToastStore::new();
        let vm = view_model(&server, toasts);
        vm.load("Engineering".into()).await;
        assert_eq!(vm.rows.get_untracked().len(), 1);

        vm.reset();
        vm.load("Marketing".into()).await;
        assert!(vm.rows.get_untracked().is_empty());
        assert_eq!(toasts.messages().len(), 1);
        departments.assert_hits_async(2).await;
        runtime.dispose();
    }
}
