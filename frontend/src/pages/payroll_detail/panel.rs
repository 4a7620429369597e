use leptos::*;

use super::{
    utils::{dialog_description, payroll_badge, EmployeePayrollRow, PayrollStats},
    view_model::use_payroll_detail_view_model,
};
use crate::{
    components::{
        badge::{Badge, BadgeTone, StatusBadge},
        cards::StatCard,
        dialog::Modal,
        empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    utils::format::{format_percent, format_vnd},
};

const TH_CLASS: &str = "px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase";

#[component]
pub fn DepartmentPayrollDetailDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] department_name: Signal<String>,
    #[prop(into)] stats: MaybeSignal<PayrollStats>,
    #[prop(optional, into)] selected_month: Signal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = use_payroll_detail_view_model(is_open, department_name, selected_month);
    let title = Signal::derive(move || format!("Chi tiết lương: {}", department_name.get()));
    let description =
        Signal::derive(move || dialog_description(selected_month.get().as_deref()));

    view! {
        <Modal
            is_open=is_open
            title=title
            description=description
            on_close=on_close
            wide=true
        >
            <PayrollSummary stats=stats />
            <section class="space-y-3">
                <h3 class="text-base font-semibold text-fg">"Danh sách lương nhân viên"</h3>
                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <Show
                        when=move || !vm.rows.with(Vec::is_empty)
                        fallback=|| view! { <EmptyState title="Chưa có dữ liệu lương" /> }
                    >
                        <PayrollRowsTable rows=vm.rows.into() />
                    </Show>
                </Show>
            </section>
        </Modal>
    }
}

#[component]
fn PayrollSummary(stats: MaybeSignal<PayrollStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard label="Số nhân viên" value=Signal::derive(move || stats.get().employees.to_string()) />
            <StatCard
                label="Tổng quỹ lương"
                value=Signal::derive(move || format_vnd(stats.get().total_salary))
                value_class="text-action-primary-bg"
            />
            <StatCard
                label="Lương TB"
                value=Signal::derive(move || format_vnd(stats.get().avg_salary))
                value_class="text-status-success-text"
            />
            <div class="bg-surface-elevated shadow rounded-lg px-4 py-5 sm:p-6 flex flex-col items-center justify-center gap-2">
                {move || view! { <Badge label=format_percent(stats.get().percentage) tone=BadgeTone::Primary /> }}
                <p class="text-xs text-fg-muted">"Tỷ lệ"</p>
            </div>
        </div>
    }
}

#[component]
fn PayrollRowsTable(rows: Signal<Vec<EmployeePayrollRow>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=TH_CLASS>"Nhân viên"</th>
                        <th class=TH_CLASS>"Mã NV"</th>
                        <th class=TH_CLASS>"Lương cơ bản"</th>
                        <th class=TH_CLASS>"Làm thêm"</th>
                        <th class=TH_CLASS>"Thưởng"</th>
                        <th class=TH_CLASS>"Khấu trừ"</th>
                        <th class=TH_CLASS>"Tổng lương"</th>
                        <th class=TH_CLASS>"Trạng thái"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let badge = payroll_badge(&row.status);
                                view! {
                                    <tr class="hover:bg-surface-muted">
                                        <td class="px-4 py-2 text-sm font-medium text-fg">{row.name}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{row.employee_id}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{format_vnd(row.base_salary)}</td>
                                        <td class="px-4 py-2 text-sm text-status-success-text">
                                            {format!("+{}", format_vnd(row.overtime_pay))}
                                        </td>
                                        <td class="px-4 py-2 text-sm text-status-success-text">
                                            {format!("+{}", format_vnd(row.bonus))}
                                        </td>
                                        <td class="px-4 py-2 text-sm text-status-error-text">
                                            {format!("-{}", format_vnd(row.deductions))}
                                        </td>
                                        <td class="px-4 py-2 text-sm font-semibold text-action-primary-bg">
                                            {format_vnd(row.total_salary)}
                                        </td>
                                        <td class="px-4 py-2"><StatusBadge badge=badge /></td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
