use leptos::*;

use super::view_model::{use_edit_salary_view_model, EditSalaryViewModel};
use crate::{
    api::UserSalaryInfo,
    components::{dialog::Modal, layout::LoadingSpinner},
    utils::format::format_vnd,
};

const MODE_ACTIVE: &str =
    "px-4 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text";
const MODE_IDLE: &str =
    "px-4 py-2 rounded-md text-sm font-medium border border-border text-fg hover:bg-action-ghost-bg-hover";

#[component]
pub fn EditUserBaseSalaryDialog(
    #[prop(into)] user_id: Signal<String>,
    #[prop(into)] user_name: MaybeSignal<String>,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(optional)] on_success: Option<Callback<()>>,
) -> impl IntoView {
    let vm = use_edit_salary_view_model(user_id, is_open, on_close, on_success);
    let saving = vm.is_saving();

    view! {
        <Modal
            is_open=is_open
            title="Chỉnh Sửa Lương Cơ Bản".to_string()
            description=user_name
            on_close=on_close
        >
            <Show
                when=move || !vm.loading_info.get()
                fallback=|| view! { <LoadingSpinner label="Đang tải thông tin..." /> }
            >
                {move || match vm.info.get() {
                    Some(info) => view! {
                        <div class="space-y-6">
                            <CurrentSalaryPanel info=info />
                            <SalaryModeForm vm=vm />
                        </div>
                    }
                    .into_view(),
                    None => view! {
                        <p class="py-8 text-center text-fg-muted">"Không lấy được thông tin"</p>
                    }
                    .into_view(),
                }}
            </Show>
            <div class="flex justify-end gap-3 pt-2">
                <button
                    type="button"
                    class=MODE_IDLE
                    disabled=move || saving.get()
                    on:click=move |_| on_close.call(())
                >
                    "Hủy"
                </button>
                <button
                    type="button"
                    class=MODE_ACTIVE
                    disabled=move || saving.get() || !vm.can_save()
                    on:click=move |_| {
                        vm.save();
                    }
                >
                    {move || if saving.get() { "Đang lưu..." } else { "Lưu" }}
                </button>
            </div>
        </Modal>
    }
}

#[component]
fn CurrentSalaryPanel(info: UserSalaryInfo) -> impl IntoView {
    let or_na = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| "N/A".into());

    view! {
        <div class="rounded-lg border border-border bg-surface-muted p-4 space-y-2">
            <h3 class="text-sm font-semibold text-fg">"Thông Tin Lương Hiện Tại"</h3>
            <dl class="grid grid-cols-2 gap-x-4 gap-y-2 text-sm text-fg-muted">
                <div><dt class="inline font-medium text-fg">"Phòng ban: "</dt><dd class="inline">{or_na(info.department.clone())}</dd></div>
                <div><dt class="inline font-medium text-fg">"Chức vụ: "</dt><dd class="inline">{or_na(info.position.clone())}</dd></div>
                <div><dt class="inline font-medium text-fg">"Nguồn lương: "</dt><dd class="inline">{info.source.label()}</dd></div>
                <div>
                    <dt class="inline font-medium text-fg">"Lương hiện tại: "</dt>
                    <dd class="inline font-semibold text-status-success-text">{format_vnd(info.calculated_salary)}</dd>
                </div>
            </dl>
            {info.matrix_salary.filter(|amount| *amount != 0.0).map(|amount| view! {
                <p class="mt-3 pt-3 border-t border-border text-sm text-fg-muted">
                    <span class="font-medium text-fg">"Lương từ thang lương: "</span>
                    <span class="font-semibold">{format_vnd(amount)}</span>
                </p>
            })}
        </div>
    }
}

#[component]
fn SalaryModeForm(vm: EditSalaryViewModel) -> impl IntoView {
    let mode_class = move |active: bool| if active { MODE_ACTIVE } else { MODE_IDLE };

    view! {
        <div class="space-y-4">
            <div>
                <p class="text-sm font-medium text-fg">"Phương Thức Tính Lương"</p>
                <div class="flex gap-4 mt-2">
                    <button
                        type="button"
                        class=move || mode_class(!vm.is_custom())
                        on:click=move |_| vm.use_matrix()
                    >
                        "Dùng Lương Từ Thang Lương"
                    </button>
                    <button
                        type="button"
                        class=move || mode_class(vm.is_custom())
                        on:click=move |_| vm.use_custom()
                    >
                        "Set Lương Riêng"
                    </button>
                </div>
            </div>
            <Show when=move || vm.is_custom()>
                <div>
                    <label for="baseSalary" class="text-sm font-medium text-fg">"Lương Cơ Bản (VNĐ) *"</label>
                    <input
                        id="baseSalary"
                        type="number"
                        class="mt-1 w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                        placeholder="Nhập lương cơ bản"
                        prop:value=move || vm.form.with(|form| form.input.clone())
                        on:input=move |ev| vm.set_input(event_target_value(&ev))
                    />
                    <p class="text-xs text-fg-muted mt-1">
                        "Lương này sẽ ưu tiên cao nhất, bỏ qua lương từ thang lương"
                    </p>
                </div>
            </Show>
        </div>
    }
}
