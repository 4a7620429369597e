use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::{
    api::{AnalyticsPerformer, DepartmentEmployee},
    components::badge::{BadgeInfo, BadgeTone},
    utils::time::iso_date,
};

pub const LOOKBACK_DAYS: i64 = 7;
const MISSING: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttendanceWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl AttendanceWindow {
    pub fn ending_on(today: NaiveDate) -> Self {
        Self {
            from: today - Duration::days(LOOKBACK_DAYS),
            to: today,
        }
    }
}

/// Department-level shares passed in by the caller, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AttendanceStats {
    pub on_time: f64,
    pub late: f64,
    pub absent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeAttendanceRow {
    pub name: String,
    pub email: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub hours: String,
    pub status: String,
}

/// Absence outranks lateness; anyone with neither is on time.
pub fn infer_attendance_status(performer: &AnalyticsPerformer) -> &'static str {
    if performer.absent > 0 {
        "absent"
    } else if performer.late > 0 {
        "late"
    } else {
        "ontime"
    }
}

pub fn email_index(employees: &[DepartmentEmployee]) -> HashMap<String, String> {
    employees
        .iter()
        .filter_map(|emp| {
            emp.email
                .as_ref()
                .filter(|email| !email.is_empty())
                .map(|email| (emp.name.clone(), email.clone()))
        })
        .collect()
}

pub fn build_attendance_rows(
    performers: &[AnalyticsPerformer],
    emails: &HashMap<String, String>,
    window: AttendanceWindow,
) -> Vec<EmployeeAttendanceRow> {
    let date = iso_date(window.to);
    performers
        .iter()
        .map(|performer| EmployeeAttendanceRow {
            name: if performer.name.is_empty() {
                "N/A".to_string()
            } else {
                performer.name.clone()
            },
            email: emails
                .get(&performer.name)
                .cloned()
                .unwrap_or_else(|| "N/A".to_string()),
            date: date.clone(),
            check_in: performer
                .avg_check_in
                .as_deref()
                .filter(|value| !value.is_empty() && *value != MISSING)
                .unwrap_or(MISSING)
                .to_string(),
            check_out: MISSING.to_string(),
            hours: MISSING.to_string(),
            status: infer_attendance_status(performer).to_string(),
        })
        .collect()
}

pub fn attendance_badge(status: &str) -> BadgeInfo {
    match status {
        "ontime" | "present" => BadgeInfo::new("Đúng giờ", BadgeTone::Success),
        "late" => BadgeInfo::new("Đi muộn", BadgeTone::Warning),
        "absent" => BadgeInfo::new("Vắng", BadgeTone::Danger),
        other => BadgeInfo::new(other, BadgeTone::Outline),
    }
}
