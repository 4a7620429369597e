use crate::{
    api::PayrollRecord,
    components::badge::{BadgeInfo, BadgeTone},
};

pub const PAYROLL_PAGE_LIMIT: u32 = 100;

/// Department totals supplied by the payroll overview.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayrollStats {
    pub employees: u32,
    pub total_salary: f64,
    pub avg_salary: f64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmployeePayrollRow {
    pub name: String,
    pub employee_id: String,
    pub base_salary: f64,
    pub overtime_pay: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub total_salary: f64,
    pub status: String,
}

impl From<PayrollRecord> for EmployeePayrollRow {
    fn from(record: PayrollRecord) -> Self {
        let employee_id = record
            .employee_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| record.user_id.employee_id().filter(|id| !id.is_empty()))
            .unwrap_or("-")
            .to_string();
        Self {
            name: record.user_id.name().to_string(),
            employee_id,
            base_salary: record.base_salary,
            overtime_pay: record.overtime_pay,
            bonus: record.bonus,
            deductions: record.deductions,
            total_salary: record.total_salary,
            status: record.status,
        }
    }
}

pub fn payroll_badge(status: &str) -> BadgeInfo {
    match status {
        "paid" => BadgeInfo::new("Đã thanh toán", BadgeTone::Success),
        "approved" => BadgeInfo::new("Đã duyệt", BadgeTone::Primary),
        "pending" => BadgeInfo::new("Chờ duyệt", BadgeTone::Warning),
        other => BadgeInfo::new(other, BadgeTone::Outline),
    }
}

pub fn dialog_description(month: Option<&str>) -> String {
    let base = "Xem chi tiết lương của nhân viên trong phòng ban";
    match month.filter(|m| !m.is_empty()) {
        Some(month) => format!("{} - Tháng {}", base, month),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PayrollUser, PayrollUserRef};

    fn record(employee_id: Option<&str>, user: PayrollUserRef) -> PayrollRecord {
        PayrollRecord {
            user_id: user,
            employee_id: employee_id.map(str::to_string),
            base_salary: 10_000_000.0,
            overtime_pay: 500_000.0,
            bonus: 0.0,
            deductions: 200_000.0,
            total_salary: 10_300_000.0,
            status: "paid".into(),
        }
    }

    #[test]
    fn employee_id_falls_back_through_user_then_dash() {
        let populated = || {
            PayrollUserRef::Populated(PayrollUser {
                name: "An".into(),
                employee_id: Some("EMP-7".into()),
            })
        };
        let own = EmployeePayrollRow::from(record(Some("EMP-1"), populated()));
        assert_eq!(own.employee_id, "EMP-1");
        assert_eq!(own.name, "An");

        let from_user = EmployeePayrollRow::from(record(None, populated()));
        assert_eq!(from_user.employee_id, "EMP-7");

        let bare = EmployeePayrollRow::from(record(None, PayrollUserRef::Id("u1".into())));
        assert_eq!(bare.employee_id, "-");
        assert_eq!(bare.name, "N/A");
    }

    #[test]
    fn payroll_badges_cover_known_statuses() {
        assert_eq!(payroll_badge("paid"), BadgeInfo::new("Đã thanh toán", BadgeTone::Success));
        assert_eq!(payroll_badge("approved").tone, BadgeTone::Primary);
        assert_eq!(payroll_badge("pending").label, "Chờ duyệt");
        assert_eq!(payroll_badge("draft"), BadgeInfo::new("draft", BadgeTone::Outline));
    }

    #[test]
    fn description_mentions_month_when_given() {
        assert_eq!(
            dialog_description(Some("2025-01")),
            "Xem chi tiết lương của nhân viên trong phòng ban - Tháng 2025-01"
        );
        assert_eq!(
            dialog_description(None),
            "Xem chi tiết lương của nhân viên trong phòng ban"
        );
    }
}
