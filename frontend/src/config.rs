use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIME_ZONE: &str = "Asia/Ho_Chi_Minh";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
    pub chatbot_enabled: Option<bool>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_object(name: &str) -> Option<js_sys::Object> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

#[cfg(target_arch = "wasm32")]
fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<wasm_bindgen::JsValue> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    })
}

// window.__WORKFORCE_ENV (env.js) wins over window.__WORKFORCE_CONFIG.
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let obj = read_global_object("__WORKFORCE_ENV")
        .or_else(|| read_global_object("__WORKFORCE_CONFIG"))?;
    let api_base_url = read_key(&obj, &["API_BASE_URL", "api_base_url"]).and_then(|v| v.as_string());
    let time_zone = read_key(&obj, &["TIME_ZONE", "time_zone"]).and_then(|v| v.as_string());
    let chatbot_enabled = read_key(&obj, &["CHATBOT_ENABLED", "chatbot_enabled"]).and_then(|v| {
        v.as_bool()
            .or_else(|| v.as_string().map(|s| !s.eq_ignore_ascii_case("false")))
    });
    Some(RuntimeConfig {
        api_base_url,
        time_zone,
        chatbot_enabled,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

async fn load_runtime_config() -> RuntimeConfig {
    if let Some(cfg) = RUNTIME_CONFIG.get() {
        return cfg.clone();
    }
    let cfg = match snapshot_from_globals() {
        Some(cfg) => cfg,
        None => fetch_runtime_config().await.unwrap_or_default(),
    };
    let _ = RUNTIME_CONFIG.set(cfg.clone());
    cfg
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let cfg = load_runtime_config().await;
    match cfg.api_base_url {
        Some(url) if !url.trim().is_empty() => cache_base_url(&url),
        _ => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

pub fn current_time_zone() -> Tz {
    RUNTIME_CONFIG
        .get()
        .and_then(|cfg| cfg.time_zone.as_deref())
        .and_then(parse_time_zone)
        .unwrap_or(chrono_tz::Asia::Ho_Chi_Minh)
}

pub fn chatbot_enabled() -> bool {
    RUNTIME_CONFIG
        .get()
        .and_then(|cfg| cfg.chatbot_enabled)
        .unwrap_or(true)
}

fn parse_time_zone(value: &str) -> Option<Tz> {
    value.trim().parse::<Tz>().ok()
}
