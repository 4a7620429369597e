use chrono::NaiveDate;

use super::utils::AttendanceQuery;
use crate::api::{ApiClient, ApiError, DepartmentAttendanceResponse, ExportedFile};

pub async fn fetch_department_attendance(
    api: &ApiClient,
    query: &AttendanceQuery,
) -> Result<DepartmentAttendanceResponse, ApiError> {
    api.get_department_attendance(&query.to_params()).await
}

/// The export covers exactly the selected day.
pub async fn export_day(api: &ApiClient, date: NaiveDate) -> Result<ExportedFile, ApiError> {
    api.export_attendance_analytics(date, date).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_sends_date_search_and_page() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/attendance/department")
                    .query_param("date", "2025-04-02")
                    .query_param("search", "lan")
                    .query_param("page", "1")
                    .query_param("limit", "20");
                then.status(200).json_body(json!({
                    "records": [{
                        "id": "r1",
                        "userId": "u-001",
                        "name": "Lan",
                        "email": "lan@example.com",
                        "date": "2025-04-02",
                        "checkIn": "08:00",
                        "checkOut": "17:00",
                        "hours": 8,
                        "status": "ontime",
                        "location": "HQ"
                    }],
                    "summary": { "total": 5, "present": 4, "late": 1, "absent": 0 },
                    "pagination": { "page": 1, "limit": 20, "total": 1, "totalPages": 1 }
                }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let query = AttendanceQuery::new(date).with_page(3).with_search("lan");
        let response = fetch_department_attendance(&api, &query).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response.records[0].hours, "8");
        assert_eq!(response.summary.present, 4);
    }

    #[tokio::test]
    async fn export_uses_same_day_for_both_bounds() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/attendance/analytics/export")
                    .query_param("from", "2025-04-02")
                    .query_param("to", "2025-04-02");
                then.status(200).body("xlsx-bytes");
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let file = export_day(&api, NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(file.filename, "BaoCaoPhanTichChamCong_2025-04-02.xlsx");
        assert_eq!(file.bytes, b"xlsx-bytes".to_vec());
    }
}
