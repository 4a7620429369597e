use std::rc::Rc;

use super::utils::{build_attendance_rows, email_index, AttendanceWindow, EmployeeAttendanceRow};
use crate::{
    api::ApiClient,
    pages::department_detail::{resolve_department_id, DetailLoadError},
};

#[derive(Clone)]
pub struct AttendanceDetailRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceDetailRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceDetailRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn resolve_department(&self, name: &str) -> Result<String, DetailLoadError> {
        resolve_department_id(&self.client, name).await
    }

    /// Employee emails first, then the analytics rows for the window.
    pub async fn fetch_rows(
        &self,
        department_id: &str,
        window: AttendanceWindow,
    ) -> Result<Vec<EmployeeAttendanceRow>, DetailLoadError> {
        let employees = self
            .client
            .get_department_employees(department_id)
            .await
            .map_err(DetailLoadError::RecordsFailed)?;
        let emails = email_index(&employees.employees);
        let analytics = self
            .client
            .get_attendance_analytics(window.from, window.to, department_id)
            .await
            .map_err(DetailLoadError::RecordsFailed)?;
        Ok(build_attendance_rows(
            &analytics.top_performers,
            &emails,
            window,
        ))
    }

    pub async fn load(
        &self,
        department_name: &str,
        window: AttendanceWindow,
    ) -> Result<Vec<EmployeeAttendanceRow>, DetailLoadError> {
        let department_id = self.resolve_department(department_name).await?;
        self.fetch_rows(&department_id, window).await
    }
}
