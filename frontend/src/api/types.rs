use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl CurrentUser {
    pub fn identifier(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }
}

/// `/auth/me` answers either `{ "user": {...} }` or the bare user object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CurrentUserEnvelope {
    Wrapped { user: CurrentUser },
    Bare(CurrentUser),
}

impl CurrentUserEnvelope {
    pub fn into_user(self) -> CurrentUser {
        match self {
            Self::Wrapped { user } => user,
            Self::Bare(user) => user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl Department {
    pub fn identifier(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.id.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentListResponse {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DepartmentEmployee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentEmployeesResponse {
    #[serde(default)]
    pub employees: Vec<DepartmentEmployee>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPerformer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub on_time: u32,
    #[serde(default)]
    pub late: u32,
    #[serde(default)]
    pub absent: u32,
    #[serde(default)]
    pub avg_check_in: Option<String>,
    #[serde(default)]
    pub punctuality: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceAnalytics {
    #[serde(default)]
    pub top_performers: Vec<AnalyticsPerformer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAttendanceRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub check_in: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub check_out: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub hours: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentAttendanceSummary {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub late: u32,
    #[serde(default)]
    pub absent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_limit")]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

fn default_page_limit() -> u32 {
    20
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: default_page_limit(),
            total: 0,
            total_pages: 0,
        }
    }
}

impl Pagination {
    pub fn previous_page(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1).min(self.total_pages.max(1))
    }

    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentAttendanceResponse {
    #[serde(default)]
    pub records: Vec<DepartmentAttendanceRecord>,
    #[serde(default)]
    pub summary: DepartmentAttendanceSummary,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// `userId` arrives populated when the backend joins users, a bare id otherwise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PayrollUserRef {
    Populated(PayrollUser),
    Id(String),
}

impl PayrollUserRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Populated(user) => &user.name,
            Self::Id(_) => "N/A",
        }
    }

    pub fn employee_id(&self) -> Option<&str> {
        match self {
            Self::Populated(user) => user.employee_id.as_deref(),
            Self::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub user_id: PayrollUserRef,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub base_salary: f64,
    #[serde(default)]
    pub overtime_pay: f64,
    #[serde(default)]
    pub bonus: f64,
    #[serde(default)]
    pub deductions: f64,
    #[serde(default)]
    pub total_salary: f64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollListResponse {
    #[serde(default)]
    pub records: Vec<PayrollRecord>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalarySource {
    #[serde(rename = "USER_BASE_SALARY")]
    UserBaseSalary,
    #[serde(rename = "SALARY_MATRIX")]
    SalaryMatrix,
    #[serde(rename = "DEFAULT_CONFIG")]
    DefaultConfig,
    #[serde(other)]
    Unknown,
}

impl SalarySource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserBaseSalary => "Lương riêng (Override)",
            Self::SalaryMatrix => "Thang lương",
            Self::DefaultConfig => "Lương mặc định",
            Self::Unknown => "N/A",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSalaryInfo {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub department_code: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub base_salary: Option<f64>,
    #[serde(default)]
    pub matrix_salary: Option<f64>,
    #[serde(default)]
    pub calculated_salary: f64,
    pub source: SalarySource,
}

impl UserSalaryInfo {
    /// A zero override counts as "no override".
    pub fn override_amount(&self) -> Option<f64> {
        self.base_salary.filter(|amount| *amount != 0.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBaseSalaryRequest {
    #[serde(serialize_with = "serialize_amount")]
    pub base_salary: Option<f64>,
}

/// Whole amounts go on the wire as JSON integers.
fn serialize_amount<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        None => serializer.serialize_none(),
        Some(amount) if amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(*amount as i64)
        }
        Some(amount) => serializer.serialize_f64(*amount),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSource {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<ChatSource>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub last_activity: String,
    #[serde(default)]
    pub message_count: u32,
    #[serde(default)]
    pub preview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationsResponse {
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDetail {
    pub id: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub last_activity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub conversation_id: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub sources: Option<Vec<ChatSource>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthComponents {
    #[serde(default)]
    pub mongodb: String,
    #[serde(default)]
    pub embeddings: String,
    #[serde(default)]
    pub llm: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotHealth {
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    pub components: HealthComponents,
}

impl ChatbotHealth {
    pub fn unavailable(timestamp: impl Into<String>) -> Self {
        Self {
            status: "unavailable".into(),
            timestamp: timestamp.into(),
            components: HealthComponents {
                mongodb: "error".into(),
                embeddings: "error".into(),
                llm: "error".into(),
            },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
            && self.components.mongodb == "connected"
            && self.components.embeddings == "working"
            && self.components.llm == "working"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub const SERVER_ERROR: &'static str = "SERVER_ERROR";

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    /// The backend's own message when it sent one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.code == Self::SERVER_ERROR && !self.error.trim().is_empty() {
            self.error.clone()
        } else {
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn department_identifier_prefers_mongo_id() {
        let dept: Department =
            serde_json::from_value(json!({ "_id": "m1", "id": "d1", "name": "Engineering" }))
                .unwrap();
        assert_eq!(dept.identifier(), Some("m1"));

        let dept: Department =
            serde_json::from_value(json!({ "id": "d1", "name": "Engineering" })).unwrap();
        assert_eq!(dept.identifier(), Some("d1"));

        let dept: Department = serde_json::from_value(json!({ "name": "Ghost" })).unwrap();
        assert_eq!(dept.identifier(), None);
    }

    #[test]
    fn current_user_envelope_accepts_both_shapes() {
        let wrapped: CurrentUserEnvelope = serde_json::from_value(json!({
            "user": { "_id": "u1", "name": "Lan", "email": "lan@example.com", "role": "ADMIN" }
        }))
        .unwrap();
        assert_eq!(wrapped.into_user().identifier(), Some("u1"));

        let bare: CurrentUserEnvelope = serde_json::from_value(json!({
            "id": "u2", "name": "Minh", "email": "minh@example.com"
        }))
        .unwrap();
        let user = bare.into_user();
        assert_eq!(user.identifier(), Some("u2"));
        assert!(user.role.is_none());
    }

    #[test]
    fn pagination_clamps_previous_and_next() {
        let pagination = Pagination {
            page: 1,
            limit: 20,
            total: 45,
            total_pages: 3,
        };
        assert_eq!(pagination.previous_page(), 1);
        assert_eq!(pagination.next_page(), 2);
        assert!(pagination.has_multiple_pages());

        let last = Pagination { page: 3, ..pagination };
        assert_eq!(last.next_page(), 3);
        assert!(last.is_last());

        let empty = Pagination::default();
        assert_eq!(empty.next_page(), 1);
        assert!(!empty.has_multiple_pages());
    }

    #[test]
    fn next_page_saturates_on_out_of_range_page() {
        let pagination = Pagination {
            page: u32::MAX,
            limit: 20,
            total: 0,
            total_pages: u32::MAX,
        };
        assert_eq!(pagination.next_page(), u32::MAX);
    }

    #[test]
    fn attendance_record_accepts_numeric_hours() {
        let record: DepartmentAttendanceRecord = serde_json::from_value(json!({
            "id": "r1",
            "userId": "64f0c0ffee123",
            "name": "Nguyen Van A",
            "email": "a@example.com",
            "date": "2025-01-02",
            "checkIn": "08:01",
            "checkOut": null,
            "hours": 8.5,
            "status": "ontime",
            "location": "HQ"
        }))
        .unwrap();
        assert_eq!(record.hours, "8.5");

        // Resources serialize their output; the string form must read back.
        let reread: DepartmentAttendanceRecord =
            serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();
        assert_eq!(reread, record);
        assert_eq!(record.check_out, "");
        assert!(record.employee_id.is_none());
    }

    #[test]
    fn payroll_record_user_reference_accepts_id_or_object() {
        let populated: PayrollRecord = serde_json::from_value(json!({
            "userId": { "name": "Tran B", "employeeId": "EMP-7" },
            "baseSalary": 10000000,
            "totalSalary": 11000000,
            "status": "paid"
        }))
        .unwrap();
        assert_eq!(populated.user_id.name(), "Tran B");
        assert_eq!(populated.user_id.employee_id(), Some("EMP-7"));
        assert_eq!(populated.bonus, 0.0);

        let bare: PayrollRecord = serde_json::from_value(json!({
            "userId": "u9",
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(bare.user_id.name(), "N/A");
    }

    #[test]
    fn salary_source_labels_cover_unknown_values() {
        let parse = |raw: &str| serde_json::from_value::<SalarySource>(json!(raw)).unwrap();
        assert_eq!(parse("USER_BASE_SALARY").label(), "Lương riêng (Override)");
        assert_eq!(parse("SALARY_MATRIX").label(), "Thang lương");
        assert_eq!(parse("DEFAULT_CONFIG").label(), "Lương mặc định");
        assert_eq!(parse("SOMETHING_ELSE").label(), "N/A");
    }

    #[test]
    fn update_base_salary_serializes_whole_amounts_as_integers() {
        let body = serde_json::to_value(UpdateBaseSalaryRequest {
            base_salary: Some(5_000_000.0),
        })
        .unwrap();
        assert_eq!(body, json!({ "baseSalary": 5000000 }));

        let body = serde_json::to_value(UpdateBaseSalaryRequest { base_salary: None }).unwrap();
        assert_eq!(body, json!({ "baseSalary": null }));

        let body = serde_json::to_value(UpdateBaseSalaryRequest {
            base_salary: Some(1234.5),
        })
        .unwrap();
        assert_eq!(body, json!({ "baseSalary": 1234.5 }));
    }

    #[test]
    fn chatbot_health_requires_every_component() {
        let healthy: ChatbotHealth = serde_json::from_value(json!({
            "status": "healthy",
            "timestamp": "2025-01-01T00:00:00Z",
            "components": { "mongodb": "connected", "embeddings": "working", "llm": "working" }
        }))
        .unwrap();
        assert!(healthy.is_healthy());

        let degraded = ChatbotHealth {
            components: HealthComponents {
                llm: "error".into(),
                ..healthy.components.clone()
            },
            ..healthy.clone()
        };
        assert!(!degraded.is_healthy());
        assert!(!ChatbotHealth::unavailable("now").is_healthy());
    }

    #[test]
    fn api_error_helpers_set_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("boom").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("net").code, "REQUEST_FAILED");
        assert_eq!(ApiError::not_found("gone").code, "NOT_FOUND");
        assert_eq!(format!("{}", ApiError::unknown("boom")), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn message_or_prefers_server_messages() {
        let server = ApiError {
            error: "Lương không hợp lệ".into(),
            code: ApiError::SERVER_ERROR.into(),
            details: None,
        };
        assert_eq!(server.message_or("fallback"), "Lương không hợp lệ");
        assert_eq!(
            ApiError::request_failed("HTTP 500").message_or("fallback"),
            "fallback"
        );
    }
}
