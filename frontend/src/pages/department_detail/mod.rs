//! Pieces shared by the department drill-down dialogs: resolving a
//! department name to its id and the error taxonomy of a detail load.

pub mod lookup;

pub use lookup::{resolve_department_id, DetailLoadError, DEPARTMENT_LOOKUP_LIMIT};
