use leptos::*;

use super::{
    utils::AttendanceTableRow,
    view_model::{use_department_attendance_view_model, DepartmentAttendanceViewModel},
};
use crate::{
    api::{DepartmentAttendanceSummary, Pagination},
    components::{
        badge::StatusBadge, cards::StatCard, empty_state::EmptyState, layout::LoadingSpinner,
    },
    utils::time::{iso_date, parse_iso_date},
};

const TH_CLASS: &str = "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase";
const TD_CLASS: &str = "px-4 py-3 text-sm text-fg";
const PAGER_BUTTON_CLASS: &str = "px-3 py-1 rounded-md border border-border text-sm text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn DepartmentAttendancePage() -> impl IntoView {
    let vm = use_department_attendance_view_model();
    let summary = Signal::derive(move || vm.data.with(|data| data.summary));
    let pagination = Signal::derive(move || vm.data.with(|data| data.pagination));
    let rows = Signal::derive(move || {
        vm.data
            .with(|data| data.records.iter().map(AttendanceTableRow::from).collect::<Vec<_>>())
    });

    view! {
        <div class="space-y-6">
            <div class="space-y-2">
                <h1 class="text-3xl font-bold text-fg">"Chấm công phòng ban"</h1>
                <p class="text-fg-muted">"Theo dõi tình hình chấm công của nhân viên trong phòng ban"</p>
            </div>
            <FilterBar vm=vm />
            <SummaryCards summary=summary />
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Danh sách chấm công"</h2>
                <Show
                    when=move || !vm.is_loading().get()
                    fallback=|| view! { <LoadingSpinner label="Đang tải..." /> }
                >
                    <Show
                        when=move || !rows.with(Vec::is_empty)
                        fallback=|| view! { <EmptyState title="Không có dữ liệu chấm công" /> }
                    >
                        <AttendanceTable rows=rows />
                    </Show>
                </Show>
                <Pager pagination=pagination on_page=Callback::new(move |page| vm.go_to_page(page)) />
            </div>
        </div>
    }
}

#[component]
fn FilterBar(vm: DepartmentAttendanceViewModel) -> impl IntoView {
    let search = Signal::derive(move || vm.query.with(|query| query.search.clone()));
    let date = Signal::derive(move || vm.query.with(|query| iso_date(query.date)));
    let exporting = vm.export_action.pending();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="search"
                    class="flex-1 rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    placeholder="Tìm kiếm nhân viên..."
                    prop:value=search
                    on:input=move |ev| vm.set_search(event_target_value(&ev))
                />
                <input
                    type="date"
                    class="rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg"
                    prop:value=date
                    on:change=move |ev| {
                        if let Some(date) = parse_iso_date(&event_target_value(&ev)) {
                            vm.set_date(date);
                        }
                    }
                />
                <button
                    type="button"
                    class="inline-flex items-center gap-2 rounded-md border border-border px-4 py-2 text-sm font-medium text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || exporting.get()
                    on:click=move |_| vm.export()
                >
                    {move || if exporting.get() { "Đang xuất..." } else { "Xuất báo cáo" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn SummaryCards(summary: Signal<DepartmentAttendanceSummary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
            <StatCard label="Tổng nhân viên" value=Signal::derive(move || summary.get().total.to_string()) />
            <StatCard
                label="Có mặt"
                value=Signal::derive(move || summary.get().present.to_string())
                value_class="text-status-success-text"
            />
            <StatCard
                label="Đi muộn"
                value=Signal::derive(move || summary.get().late.to_string())
                value_class="text-status-warning-text"
            />
            <StatCard
                label="Vắng mặt"
                value=Signal::derive(move || summary.get().absent.to_string())
                value_class="text-status-error-text"
            />
        </div>
    }
}

#[component]
fn AttendanceTable(rows: Signal<Vec<AttendanceTableRow>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class=TH_CLASS>"Nhân viên"</th>
                        <th class=TH_CLASS>"Ngày"</th>
                        <th class=TH_CLASS>"Giờ vào"</th>
                        <th class=TH_CLASS>"Giờ ra"</th>
                        <th class=TH_CLASS>"Số giờ"</th>
                        <th class=TH_CLASS>"Địa điểm"</th>
                        <th class=TH_CLASS>"Trạng thái"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || rows.get()
                        key=|row| row.key.clone()
                        children=|row| {
                            view! {
                                <tr>
                                    <td class=TD_CLASS>
                                        <div class="flex items-center gap-3">
                                            <div class="h-10 w-10 rounded-full bg-surface-muted flex items-center justify-center text-sm font-semibold text-fg">
                                                {row.initials}
                                            </div>
                                            <div>
                                                <p class="font-medium text-fg">{row.name}</p>
                                                <p class="text-sm text-fg-muted">{row.employee_ref}</p>
                                            </div>
                                        </div>
                                    </td>
                                    <td class=TD_CLASS>{row.date}</td>
                                    <td class=TD_CLASS>{row.check_in}</td>
                                    <td class=TD_CLASS>{row.check_out}</td>
                                    <td class=TD_CLASS>{row.hours}</td>
                                    <td class=TD_CLASS>{row.location}</td>
                                    <td class=TD_CLASS><StatusBadge badge=row.badge /></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn Pager(pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || pagination.get().has_multiple_pages()>
            <div class="flex items-center justify-between">
                <p class="text-sm text-fg-muted">
                    {move || {
                        let p = pagination.get();
                        format!("Trang {} / {}", p.page, p.total_pages)
                    }}
                </p>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class=PAGER_BUTTON_CLASS
                        disabled=move || pagination.get().is_first()
                        on:click=move |_| on_page.call(pagination.get_untracked().previous_page())
                    >
                        "Trước"
                    </button>
                    <button
                        type="button"
                        class=PAGER_BUTTON_CLASS
                        disabled=move || pagination.get().is_last()
                        on:click=move |_| on_page.call(pagination.get_untracked().next_page())
                    >
                        "Sau"
                    </button>
                </div>
            </div>
        </Show>
    }
}
