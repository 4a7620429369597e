pub mod attendance_detail;
pub mod chatbot;
pub mod department_attendance;
pub mod department_detail;
pub mod edit_salary;
pub mod login;
pub mod payroll_detail;
pub mod profile;

pub use attendance_detail::{AttendanceStats, DepartmentAttendanceDetailDialog};
pub use edit_salary::EditUserBaseSalaryDialog;
pub use payroll_detail::{DepartmentPayrollDetailDialog, PayrollStats};
