use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header::HeaderMap, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{api::types::ApiError, config, utils::storage as storage_utils};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, "refresh_token", "current_user"];
pub const LOGIN_PATH: &str = "/login";

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn get_auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = storage_utils::read_item(ACCESS_TOKEN_KEY) {
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }
        headers
    }

    fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_auth_session();
            redirect_to_login();
        }
    }

    fn clear_auth_session() {
        storage_utils::remove_items(&SESSION_KEYS);
    }

    #[cfg(target_arch = "wasm32")]
    fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.fetch_credentials_include()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder
    }

    /// Attaches session headers, sends, and reacts to 401s. Non-2xx
    /// responses are returned as-is for the caller to decode.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let builder = Self::with_credentials(builder.headers(self.get_auth_headers()));
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        Self::decode_json(response).await
    }

    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.send(builder).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        parse_error_body(status, &body)
    }
}

/// Sends the browser to the login placeholder unless it is already there.
#[cfg(target_arch = "wasm32")]
pub(crate) fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if matches!(location.pathname().as_deref(), Ok(LOGIN_PATH)) {
            return;
        }
        let _ = location.set_href(LOGIN_PATH);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn redirect_to_login() {}

fn parse_error_body(status: StatusCode, body: &str) -> ApiError {
    let fallback = || ApiError::request_failed(format!("HTTP {}", status.as_u16()));
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return fallback();
    };
    match parsed.error.or(parsed.message) {
        Some(message) if !message.trim().is_empty() => ApiError {
            error: message,
            code: parsed
                .code
                .unwrap_or_else(|| ApiError::SERVER_ERROR.to_string()),
            details: parsed.details,
        },
        _ => fallback(),
    }
}

pub(crate) fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}
