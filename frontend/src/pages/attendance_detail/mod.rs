//! Per-department attendance dialog opened from the department list.

pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DepartmentAttendanceDetailDialog;
pub use utils::AttendanceStats;
