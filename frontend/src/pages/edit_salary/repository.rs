use std::rc::Rc;

use crate::api::{ApiClient, ApiError, UpdateBaseSalaryRequest, UserSalaryInfo};

#[derive(Clone)]
pub struct EditSalaryRepository {
    client: Rc<ApiClient>,
}

impl Default for EditSalaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSalaryRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_info(&self, user_id: &str) -> Result<UserSalaryInfo, ApiError> {
        self.client.get_user_salary_info(user_id).await
    }

    pub async fn save(
        &self,
        user_id: &str,
        payload: &UpdateBaseSalaryRequest,
    ) -> Result<(), ApiError> {
        self.client.update_user_base_salary(user_id, payload).await
    }
}
