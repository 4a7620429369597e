#[cfg(target_arch = "wasm32")]
use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn read_item(key: &str) -> Option<String> {
    local_storage()
        .ok()?
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_item(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn remove_items(keys: &[&str]) {
    match local_storage() {
        Ok(storage) => {
            for key in keys {
                let _ = storage.remove_item(key);
            }
        }
        Err(err) => log::warn!("[storage] cannot clear session: {}", err),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_items(_keys: &[&str]) {}
