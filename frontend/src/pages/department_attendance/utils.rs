use chrono::NaiveDate;

use crate::{
    api::{DepartmentAttendanceParams, DepartmentAttendanceRecord},
    components::badge::{BadgeInfo, BadgeTone},
    utils::format::{dash_if_empty, initials, short_employee_ref},
};

pub const PAGE_SIZE: u32 = 20;

/// Fetch key for the attendance list. `token` only exists to force a
/// re-fetch of an otherwise unchanged query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub date: NaiveDate,
    pub search: String,
    pub page: u32,
    pub limit: u32,
    pub token: u32,
}

impl AttendanceQuery {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            search: String::new(),
            page: 1,
            limit: PAGE_SIZE,
            token: 0,
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    pub fn with_date(self, date: NaiveDate) -> Self {
        Self {
            date,
            page: 1,
            ..self
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn refresh(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
            ..self
        }
    }

    pub fn to_params(&self) -> DepartmentAttendanceParams {
        let search = self.search.trim();
        DepartmentAttendanceParams {
            date: self.date,
            search: (!search.is_empty()).then(|| search.to_string()),
            page: self.page,
            limit: self.limit,
        }
    }
}

pub fn department_status_badge(status: &str) -> BadgeInfo {
    match status {
        "ontime" => BadgeInfo::new("Đúng giờ", BadgeTone::Success),
        "late" => BadgeInfo::new("Đi muộn", BadgeTone::Warning),
        "absent" => BadgeInfo::new("Vắng mặt", BadgeTone::Danger),
        "overtime" => BadgeInfo::new("Tăng ca", BadgeTone::Info),
        other => BadgeInfo::new(other, BadgeTone::Outline),
    }
}

/// Display projection of one record.
#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceTableRow {
    pub key: String,
    pub initials: String,
    pub name: String,
    pub employee_ref: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub hours: String,
    pub location: String,
    pub badge: BadgeInfo,
}

impl From<&DepartmentAttendanceRecord> for AttendanceTableRow {
    fn from(record: &DepartmentAttendanceRecord) -> Self {
        Self {
            key: record.id.clone(),
            initials: initials(&record.name),
            name: record.name.clone(),
            employee_ref: format!(
                "ID: {}",
                short_employee_ref(record.employee_id.as_deref(), &record.user_id)
            ),
            date: record.date.clone(),
            check_in: dash_if_empty(&record.check_in),
            check_out: dash_if_empty(&record.check_out),
            hours: record.hours.clone(),
            location: record.location.clone(),
            badge: department_status_badge(&record.status),
        }
    }
}
