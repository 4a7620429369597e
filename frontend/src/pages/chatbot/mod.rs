//! Assistant page. Conversation state lives in `state::chatbot`; this page
//! only renders it and forwards user input.

pub mod panel;
pub mod utils;
pub mod view_model;

pub use panel::ChatbotPage;
