pub mod download;
pub mod format;
pub mod request_token;
pub mod storage;
pub mod time;

pub use download::trigger_bytes_download;
pub use request_token::{RequestTicket, RequestToken};
