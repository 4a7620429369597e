use thiserror::Error;

use crate::api::{ApiClient, ApiError, Department};

/// Upper bound of the department list scanned for a name match.
pub const DEPARTMENT_LOOKUP_LIMIT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetailLoadError {
    #[error("department `{0}` is not in the department list")]
    DepartmentNotFound(String),
    #[error("department lookup failed: {0}")]
    DepartmentLookupFailed(ApiError),
    #[error("loading records failed: {0}")]
    RecordsFailed(ApiError),
}

impl DetailLoadError {
    /// Toast text for this failure. `records_message` names the record kind
    /// the dialog was loading.
    pub fn user_message(&self, records_message: &str) -> String {
        match self {
            Self::DepartmentNotFound(_) => "Không tìm thấy phòng ban".to_string(),
            Self::DepartmentLookupFailed(_) => "Không thể tải thông tin phòng ban".to_string(),
            Self::RecordsFailed(_) => records_message.to_string(),
        }
    }
}

pub fn find_department<'a>(departments: &'a [Department], name: &str) -> Option<&'a Department> {
    departments.iter().find(|dept| dept.name == name)
}

/// Resolves `name` to an id with one bounded list fetch and an exact,
/// case-sensitive name scan.
pub async fn resolve_department_id(api: &ApiClient, name: &str) -> Result<String, DetailLoadError> {
    let response = api
        .list_departments(1, DEPARTMENT_LOOKUP_LIMIT)
        .await
        .map_err(DetailLoadError::DepartmentLookupFailed)?;
    find_department(&response.departments, name)
        .and_then(Department::identifier)
        .map(str::to_string)
        .ok_or_else(|| DetailLoadError::DepartmentNotFound(name.to_string()))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn resolves_id_with_bounded_list_fetch() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/departments")
                    .query_param("page", "1")
                    .query_param("limit", "1000");
                then.status(200).json_body(json!({
                    "departments": [
                        { "_id": "d1", "name": "Engineering" },
                        { "id": "d2", "name": "Sales" }
                    ]
                }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        assert_eq!(resolve_department_id(&api, "Sales").await.unwrap(), "d2");
        assert_eq!(
            resolve_department_id(&api, "Marketing").await.unwrap_err(),
            DetailLoadError::DepartmentNotFound("Marketing".into())
        );
        list.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn lookup_failure_is_distinct_from_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/departments");
                then.status(500);
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = resolve_department_id(&api, "Engineering").await.unwrap_err();
        assert!(matches!(err, DetailLoadError::DepartmentLookupFailed(_)));
    }
}
