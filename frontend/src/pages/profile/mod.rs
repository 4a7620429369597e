pub mod panel;
pub mod utils;

pub use panel::ProfilePage;
pub use utils::{project_role, ProfileRole};
