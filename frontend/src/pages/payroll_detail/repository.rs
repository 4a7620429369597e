use std::rc::Rc;

use super::utils::{EmployeePayrollRow, PAYROLL_PAGE_LIMIT};
use crate::{
    api::ApiClient,
    pages::department_detail::{resolve_department_id, DetailLoadError},
};

#[derive(Clone)]
pub struct PayrollDetailRepository {
    client: Rc<ApiClient>,
}

impl Default for PayrollDetailRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PayrollDetailRepository {
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

    pub async fn fetch_rows(
        &self,
        department_id: &str,
        month: Option<&str>,
    ) -> Result<Vec<EmployeePayrollRow>, DetailLoadError> {
        let response = self
            .client
            .get_payroll_records(department_id, month, 1, PAYROLL_PAGE_LIMIT)
            .await
            .map_err(DetailLoadError::RecordsFailed)?;
        Ok(response
            .records
            .into_iter()
            .map(EmployeePayrollRow::from)
            .collect())
    }
}
