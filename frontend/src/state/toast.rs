use leptos::*;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Transient notifications. Pushing never blocks and never fails.
#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        let toast = Toast {
            id,
            level,
            message: message.into(),
        };
        self.toasts.try_update(|list| list.push(toast));
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts
            .try_update(|list| list.retain(|toast| toast.id != id));
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<String> {
        self.toasts
            .try_get_untracked()
            .unwrap_or_default()
            .into_iter()
            .map(|toast| toast.message)
            .collect()
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let store = *self;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || store.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastStore {
    let store = ToastStore::new();
    provide_context(store);
    store
}

pub fn use_toasts() -> ToastStore {
    use_context::<ToastStore>().unwrap_or_else(provide_toasts)
}
