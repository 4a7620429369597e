use chrono::NaiveDate;
use leptos::*;

use super::{repository, utils::AttendanceQuery};
use crate::{
    api::{ApiClient, ApiError, DepartmentAttendanceResponse, ExportedFile},
    state::toast::use_toasts,
    utils::{download::trigger_bytes_download, time::today_in_app_tz},
};

const LOAD_FAILED: &str = "Không thể tải dữ liệu chấm công";
const EXPORT_DONE: &str = "Xuất báo cáo thành công";
const EXPORT_FAILED: &str = "Xuất báo cáo thất bại";

#[derive(Clone, Copy)]
pub struct DepartmentAttendanceViewModel {
    pub query: RwSignal<AttendanceQuery>,
    pub attendance_resource:
        Resource<AttendanceQuery, Result<DepartmentAttendanceResponse, ApiError>>,
    /// Last successful response; a failed fetch leaves it in place.
    pub data: RwSignal<DepartmentAttendanceResponse>,
    pub export_action: Action<NaiveDate, Result<ExportedFile, ApiError>>,
}

impl DepartmentAttendanceViewModel {
    pub fn set_search(&self, search: String) {
        self.query.update(|query| *query = query.clone().with_search(search));
    }

    pub fn set_date(&self, date: NaiveDate) {
        self.query.update(|query| *query = query.clone().with_date(date));
    }

    pub fn go_to_page(&self, page: u32) {
        self.query.update(|query| *query = query.clone().with_page(page));
    }

    pub fn reload(&self) {
        self.query.update(|query| *query = query.clone().refresh());
    }

    pub fn export(&self) {
        let date = self.query.with_untracked(|query| query.date);
        self.export_action.dispatch(date);
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.attendance_resource.loading()
    }
}

pub fn use_department_attendance_view_model() -> DepartmentAttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let toasts = use_toasts();
    let query = create_rw_signal(AttendanceQuery::new(today_in_app_tz()));
    let data = create_rw_signal(DepartmentAttendanceResponse::default());

    let fetch_api = api.clone();
    let attendance_resource = create_resource(
        move || query.get(),
        move |query| {
            let api = fetch_api.clone();
            async move { repository::fetch_department_attendance(&api, &query).await }
        },
    );

    create_effect(move |_| {
        if let Some(result) = attendance_resource.get() {
            match result {
                Ok(response) => data.set(response),
                Err(err) => {
                    log::error!("[department-attendance] fetch failed: {}", err);
                    toasts.error(LOAD_FAILED);
                }
            }
        }
    });

    let export_action = create_action(move |date: &NaiveDate| {
        let api = api.clone();
        let date = *date;
        async move { repository::export_day(&api, date).await }
    });

    create_effect(move |_| {
        let Some(result) = export_action.value().get() else {
            return;
        };
        let outcome = result.map_err(|err| err.to_string()).and_then(|file| {
            trigger_bytes_download(&file.filename, &file.content_type, &file.bytes)
        });
        match outcome {
            Ok(()) => {
                toasts.success(EXPORT_DONE);
            }
            Err(err) => {
                log::error!("[department-attendance] export failed: {}", err);
                toasts.error(EXPORT_FAILED);
            }
        }
    });

    DepartmentAttendanceViewModel {
        query,
        attendance_resource,
        data,
        export_action,
    }
}
