pub mod badge;
pub mod cards;
pub mod dialog;
pub mod empty_state;
pub mod guard;
pub mod layout;
pub mod toast;
