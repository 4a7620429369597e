use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, DataEnvelope, PayrollListResponse, UpdateBaseSalaryRequest, UserSalaryInfo},
};

impl ApiClient {
    pub async fn get_payroll_records(
        &self,
        department_id: &str,
        month: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<PayrollListResponse, ApiError> {
        let url = self.endpoint("/payroll").await;
        let mut query = vec![
            ("department", department_id.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(month) = month.filter(|m| !m.is_empty()) {
            query.push(("month", month.to_string()));
        }
        self.send_json(self.http_client().get(url).query(&query)).await
    }

    pub async fn get_user_salary_info(&self, user_id: &str) -> Result<UserSalaryInfo, ApiError> {
        let url = self
            .endpoint(&format!(
                "/payroll/users/{}/salary-info",
                encode_segment(user_id)
            ))
            .await;
        let envelope: DataEnvelope<UserSalaryInfo> =
            self.send_json(self.http_client().get(url)).await?;
        Ok(envelope.data)
    }

    pub async fn update_user_base_salary(
        &self,
        user_id: &str,
        payload: &UpdateBaseSalaryRequest,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!(
                "/payroll/users/{}/base-salary",
                encode_segment(user_id)
            ))
            .await;
        self.send_empty(self.http_client().put(url).json(payload))
            .await
    }
}
