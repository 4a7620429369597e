use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceAnalytics, DepartmentAttendanceResponse, ExportedFile},
};
use crate::utils::{
    download::{filename_from_content_disposition, XLSX_MIME},
    time::iso_date,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentAttendanceParams {
    pub date: NaiveDate,
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl ApiClient {
    pub async fn get_attendance_analytics(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        department_id: &str,
    ) -> Result<AttendanceAnalytics, ApiError> {
        let url = self.endpoint("/attendance/analytics").await;
        let request = self.http_client().get(url).query(&[
            ("from", iso_date(from)),
            ("to", iso_date(to)),
            ("department", department_id.to_string()),
        ]);
        self.send_json(request).await
    }

    pub async fn get_department_attendance(
        &self,
        params: &DepartmentAttendanceParams,
    ) -> Result<DepartmentAttendanceResponse, ApiError> {
        let url = self.endpoint("/attendance/department").await;
        let mut query = vec![
            ("date", iso_date(params.date)),
            ("page", params.page.to_string()),
            ("limit", params.limit.to_string()),
        ];
        if let Some(search) = params.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query.push(("search", search.trim().to_string()));
        }
        self.send_json(self.http_client().get(url).query(&query)).await
    }

    pub async fn export_attendance_analytics(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ExportedFile, ApiError> {
        let url = self.endpoint("/attendance/analytics/export").await;
        let request = self
            .http_client()
            .get(url)
            .query(&[("from", iso_date(from)), ("to", iso_date(to))]);
        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        let filename = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_content_disposition)
            .unwrap_or_else(|| default_export_filename(to));
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read export: {}", e)))?;
        Ok(ExportedFile {
            filename,
            content_type: XLSX_MIME.to_string(),
            bytes: bytes.to_vec(),
        })
    }
}

pub fn default_export_filename(date: NaiveDate) -> String {
    format!("BaoCaoPhanTichChamCong_{}.xlsx", iso_date(date))
}
