use leptos::*;

use super::{
    utils::{attendance_badge, AttendanceStats, EmployeeAttendanceRow},
    view_model::use_attendance_detail_view_model,
};
use crate::{
    components::{
        badge::StatusBadge, cards::PercentCard, dialog::Modal, empty_state::EmptyState,
        layout::LoadingSpinner,
    },
    utils::time::format_vi_date,
};

const TH_CLASS: &str = "px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase";
const TD_CLASS: &str = "px-4 py-2 text-sm text-fg";

#[component]
pub fn DepartmentAttendanceDetailDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] department_name: Signal<String>,
    #[prop(into)] stats: MaybeSignal<AttendanceStats>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = use_attendance_detail_view_model(is_open, department_name);
    let title = Signal::derive(move || format!("Chi tiết chấm công: {}", department_name.get()));

    view! {
        <Modal
            is_open=is_open
            title=title
            description="Xem chi tiết chấm công của nhân viên trong phòng ban"
            on_close=on_close
            wide=true
        >
            {move || {
                let stats = stats.get();
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <PercentCard label="Đúng giờ" percent=stats.on_time bar_class="bg-status-success-text" />
                        <PercentCard label="Đi muộn" percent=stats.late bar_class="bg-status-warning-text" />
                        <PercentCard label="Vắng" percent=stats.absent bar_class="bg-status-error-text" />
                    </div>
                }
            }}
            <section class="space-y-3">
                <h3 class="text-base font-semibold text-fg">"Danh sách chấm công"</h3>
                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <Show
                        when=move || !vm.rows.with(Vec::is_empty)
                        fallback=|| view! { <EmptyState title="Chưa có dữ liệu chấm công" /> }
                    >
                        <AttendanceRowsTable rows=vm.rows.into() />
                    </Show>
                </Show>
            </section>
        </Modal>
    }
}

#[component]
fn AttendanceRowsTable(rows: Signal<Vec<EmployeeAttendanceRow>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=TH_CLASS>"Nhân viên"</th>
                        <th class=TH_CLASS>"Email"</th>
                        <th class=TH_CLASS>"Ngày"</th>
                        <th class=TH_CLASS>"Giờ vào"</th>
                        <th class=TH_CLASS>"Giờ ra"</th>
                        <th class=TH_CLASS>"Giờ làm"</th>
                        <th class=TH_CLASS>"Trạng thái"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| {
                                let badge = attendance_badge(&row.status);
                                view! {
                                    <tr>
                                        <td class=format!("{} font-medium", TD_CLASS)>{row.name}</td>
                                        <td class=TD_CLASS>{row.email}</td>
                                        <td class=TD_CLASS>{format_vi_date(&row.date)}</td>
                                        <td class=TD_CLASS>{row.check_in}</td>
                                        <td class=TD_CLASS>{row.check_out}</td>
                                        <td class=TD_CLASS>{row.hours}</td>
                                        <td class=TD_CLASS><StatusBadge badge=badge /></td>
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
