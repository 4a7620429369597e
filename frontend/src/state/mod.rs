pub mod auth;
pub mod chatbot;
pub mod toast;
