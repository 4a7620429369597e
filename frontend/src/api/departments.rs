use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, DepartmentEmployeesResponse, DepartmentListResponse},
};

impl ApiClient {
    pub async fn list_departments(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<DepartmentListResponse, ApiError> {
        let url = self.endpoint("/departments").await;
        let request = self
            .http_client()
            .get(url)
            .query(&[("page", page), ("limit", limit)]);
        self.send_json(request).await
    }

    pub async fn get_department_employees(
        &self,
        department_id: &str,
    ) -> Result<DepartmentEmployeesResponse, ApiError> {
        let url = self
            .endpoint(&format!(
                "/departments/{}/employees",
                encode_segment(department_id)
            ))
            .await;
        self.send_json(self.http_client().get(url)).await
    }
}
