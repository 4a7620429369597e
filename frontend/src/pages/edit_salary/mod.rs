//! Per-user base salary override, with fallback to the salary matrix.

pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::EditUserBaseSalaryDialog;
