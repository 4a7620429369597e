mod attendance;
mod auth;
pub mod client;
mod chatbot;
mod departments;
mod payroll;
pub mod types;

pub use attendance::{default_export_filename, DepartmentAttendanceParams};
pub use client::*;
pub use types::*;
