use std::rc::Rc;

use leptos::*;

use super::{repository::PayrollDetailRepository, utils::EmployeePayrollRow};
use crate::{
    api::ApiClient,
    state::toast::{use_toasts, ToastStore},
    utils::RequestToken,
};

const RECORDS_FAILED: &str = "Không thể tải dữ liệu lương";

/// Lookup and records are two stages: the id is re-resolved on every open,
/// and the records follow both the id and the selected month.
#[derive(Clone, Copy)]
pub struct PayrollDetailViewModel {
    pub rows: RwSignal<Vec<EmployeePayrollRow>>,
    pub loading: RwSignal<bool>,
    pub department_id: RwSignal<Option<String>>,
    lookup_token: StoredValue<RequestToken>,
    records_token: StoredValue<RequestToken>,
    repository: StoredValue<PayrollDetailRepository>,
    toasts: ToastStore,
}

impl PayrollDetailViewModel {
    pub fn new(repository: PayrollDetailRepository, toasts: ToastStore) -> Self {
        Self {
            rows: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            department_id: create_rw_signal(None),
            lookup_token: store_value(RequestToken::new()),
            records_token: store_value(RequestToken::new()),
            repository: store_value(repository),
            toasts,
        }
    }

    pub fn reset(&self) {
        self.lookup_token.with_value(RequestToken::invalidate);
        self.records_token.with_value(RequestToken::invalidate);
        self.department_id.set(None);
        self.rows.set(Vec::new());
        self.loading.set(false);
    }

    pub async fn resolve(self, department_name: String) {
        let token = self.lookup_token.get_value();
        let ticket = token.issue();
        let repository = self.repository.get_value();
        let result = repository.resolve_department(&department_name).await;
        if !token.is_current(ticket) {
            return;
        }
        match result {
            Ok(id) => self.department_id.set(Some(id)),
            Err(err) => {
                log::warn!("[payroll-detail] {}: {}", department_name, err);
                self.toasts.error(err.user_message(RECORDS_FAILED));
            }
        }
    }

    /// Only the latest records request may replace the table.
    pub async fn load_records(self, department_id: String, month: Option<String>) {
        let token = self.records_token.get_value();
        let ticket = token.issue();
        self.loading.set(true);
        let repository = self.repository.get_value();
        let result = repository
            .fetch_rows(&department_id, month.as_deref())
            .await;
        if !token.is_current(ticket) {
            return;
        }
        match result {
            Ok(rows) => self.rows.set(rows),
            Err(err) => {
                log::warn!("[payroll-detail] records for {}: {}", department_id, err);
                self.toasts.error(err.user_message(RECORDS_FAILED));
            }
        }
        self.loading.set(false);
    }
}

pub fn use_payroll_detail_view_model(
    is_open: Signal<bool>,
    department_name: Signal<String>,
    selected_month: Signal<Option<String>>,
) -> PayrollDetailViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = PayrollDetailViewModel::new(
        PayrollDetailRepository::new_with_client(Rc::new(api)),
        use_toasts(),
    );

    create_effect(move |_| {
        let open = is_open.get();
        let name = department_name.get();
        vm.reset();
        if open && !name.is_empty() {
            spawn_local(vm.resolve(name));
        }
    });

    create_effect(move |_| {
        let open = is_open.get();
        let department_id = vm.department_id.get();
        let month = selected_month.get();
        if let (true, Some(department_id)) = (open, department_id) {
            spawn_local(vm.load_records(department_id, month));
        }
    });

    vm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_forgets_resolved_department() {
        let runtime = create_runtime();
        let vm = PayrollDetailViewModel::new(PayrollDetailRepository::new(), ToastStore::new());
        vm.department_id.set(Some("d1".into()));
        vm.loading.set(true);
        vm.reset();
        assert_eq!(vm.department_id.get_untracked(), None);
        assert!(!vm.loading.get_untracked());
        runtime.dispose();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use std::time::Duration;

    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn view_model(server: &MockServer, toasts: ToastStore) -> PayrollDetailViewModel {
        let api = ApiClient::new_with_base_url(server.url("/api"));
        PayrollDetailViewModel::new(PayrollDetailRepository::new_with_client(Rc::new(api)), toasts)
    }

    async fn mock_month(server: &MockServer, month: &str, name: &str, delay_ms: u64) {
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/payroll")
                    .query_param("department", "d1")
                    .query_param("month", month);
                then.status(200)
                    .delay(Duration::from_millis(delay_ms))
                    .json_body(json!({
                        "records": [{
                            "userId": { "name": name },
                            "totalSalary": 1000000,
                            "status": "paid"
                        }]
                    }));
            })
            .await;
    }

    #[tokio::test]
    async fn month_switch_keeps_only_latest_records() {
        let server = MockServer::start_async().await;
        mock_month(&server, "2025-01", "January", 300).await;
        mock_month(&server, "2025-02", "February", 0).await;

        let runtime = create_runtime();
        let vm = view_model(&server, ToastStore::new());
        tokio::join!(
            vm.load_records("d1".into(), Some("2025-01".into())),
            vm.load_records("d1".into(), Some("2025-02".into())),
        );

        let names: Vec<String> = vm.rows.get_untracked().into_iter().map(|row| row.name).collect();
        assert_eq!(names, vec!["February".to_string()]);
        assert!(!vm.loading.get_untracked());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_records_fetch_keeps_previous_rows() {
        let server = MockServer::start_async().await;
        mock_month(&server, "2025-01", "January", 0).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/payroll").query_param("month", "2025-03");
                then.status(500).json_body(json!({ "message": "boom" }));
            })
            .await;

        let runtime = create_runtime();
        let toasts = ToastStore::new();
        let vm = view_model(&server, toasts);
        vm.load_records("d1".into(), Some("2025-01".into())).await;
        vm.load_records("d1".into(), Some("2025-03".into())).await;

        assert_eq!(vm.rows.get_untracked().len(), 1);
        assert_eq!(toasts.messages(), vec![RECORDS_FAILED.to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn stale_lookup_is_ignored_after_reset() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/departments");
                then.status(200)
                    .delay(Duration::from_millis(200))
                    .json_body(json!({ "departments": [{ "_id": "d1", "name": "Sales" }] }));
            })
            .await;

        let runtime = create_runtime();
        let vm = view_model(&server, ToastStore::new());
        let closing = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            vm.reset();
        };
        tokio::join!(vm.resolve("Sales".into()), closing);

        assert_eq!(vm.department_id.get_untracked(), None);
        runtime.dispose();
    }
}
