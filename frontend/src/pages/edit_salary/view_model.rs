use std::rc::Rc;

use leptos::*;

use super::{
    repository::EditSalaryRepository,
    utils::{SalaryForm, SalaryMode},
};
use crate::{
    api::{ApiClient, ApiError, UpdateBaseSalaryRequest, UserSalaryInfo},
    state::toast::{use_toasts, ToastStore},
    utils::RequestToken,
};

const LOAD_FAILED: &str = "Không lấy được thông tin lương";
const NOT_LOADED: &str = "Chưa tải được thông tin lương của nhân viên";
const SAVE_FAILED: &str = "Không cập nhật được lương cơ bản";
const SAVE_DONE: &str = "Đã cập nhật lương cơ bản thành công";

#[derive(Clone, Copy)]
pub struct EditSalaryViewModel {
    pub info: RwSignal<Option<UserSalaryInfo>>,
    pub loading_info: RwSignal<bool>,
    pub form: RwSignal<SalaryForm>,
    pub save_action: Action<UpdateBaseSalaryRequest, Result<(), ApiError>>,
    token: StoredValue<RequestToken>,
    repository: StoredValue<EditSalaryRepository>,
    toasts: ToastStore,
}

impl EditSalaryViewModel {
    pub fn use_matrix(&self) {
        self.form.update(SalaryForm::use_matrix);
    }

    pub fn use_custom(&self) {
        let stored = self
            .info
            .with_untracked(|info| info.as_ref().and_then(UserSalaryInfo::override_amount));
        self.form.update(|form| form.use_custom(stored));
    }

    pub fn set_input(&self, value: String) {
        self.form.update(|form| form.input = value);
    }

    pub fn is_custom(&self) -> bool {
        self.form.with(|form| form.mode == SalaryMode::Custom)
    }

    /// Saving needs the loaded info of the user being edited.
    pub fn can_save(&self) -> bool {
        !self.loading_info.get() && self.info.with(Option::is_some)
    }

    /// Forgets the previous user's salary and drops any load in flight.
    pub fn clear(&self) {
        self.token.with_value(RequestToken::invalidate);
        self.info.set(None);
        self.form.set(SalaryForm::default());
        self.loading_info.set(false);
    }

    pub async fn load(self, user_id: String) {
        self.info.set(None);
        self.form.set(SalaryForm::default());
        let token = self.token.get_value();
        let ticket = token.issue();
        self.loading_info.set(true);
        let repository = self.repository.get_value();
        let result = repository.fetch_info(&user_id).await;
        if !token.is_current(ticket) {
            return;
        }
        match result {
            Ok(loaded) => {
                self.form.set(SalaryForm::from_info(&loaded));
                self.info.set(Some(loaded));
            }
            Err(err) => {
                log::error!("[edit-salary] loading salary info for {} failed: {}", user_id, err);
                self.toasts.error(err.message_or(LOAD_FAILED));
            }
        }
        self.loading_info.set(false);
    }

    /// Validates locally; an invalid custom amount, or a user whose salary
    /// has not loaded, never reaches the server.
    pub fn save(&self) -> bool {
        if !self.info.with_untracked(Option::is_some) || self.loading_info.get_untracked() {
            self.toasts.error(NOT_LOADED);
            return false;
        }
        match self.form.with_untracked(SalaryForm::to_payload) {
            Ok(payload) => {
                self.save_action.dispatch(payload);
                true
            }
            Err(err) => {
                self.toasts.error(err.to_string());
                false
            }
        }
    }

    pub fn is_saving(&self) -> Signal<bool> {
        self.save_action.pending().into()
    }
}

pub fn use_edit_salary_view_model(
    user_id: Signal<String>,
    is_open: Signal<bool>,
    on_close: Callback<()>,
    on_success: Option<Callback<()>>,
) -> EditSalaryViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EditSalaryRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();
    let reload = create_rw_signal(0u32);

    let save_repository = repository.clone();
    let save_action = create_action(move |payload: &UpdateBaseSalaryRequest| {
        let repository = save_repository.clone();
        let payload = payload.clone();
        let id = user_id.get_untracked();
        async move { repository.save(&id, &payload).await }
    });

    let vm = EditSalaryViewModel {
        info: create_rw_signal(None),
        loading_info: create_rw_signal(false),
        form: create_rw_signal(SalaryForm::default()),
        save_action,
        token: store_value(RequestToken::new()),
        repository: store_value(repository),
        toasts,
    };

    create_effect(move |_| {
        reload.get();
        let open = is_open.get();
        let id = user_id.get();
        if !open || id.is_empty() {
            vm.clear();
            return;
        }
        spawn_local(vm.load(id));
    });

    create_effect(move |_| {
        let Some(result) = save_action.value().get() else {
            return;
        };
        match result {
            Ok(()) => {
                toasts.success(SAVE_DONE);
                if let Some(on_success) = on_success {
                    on_success.call(());
                }
                on_close.call(());
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => {
                log::error!("[edit-salary] update failed: {}", err);
                toasts.error(err.message_or(SAVE_FAILED));
            }
        }
    });

    vm
}
