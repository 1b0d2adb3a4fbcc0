pub mod badge;
pub mod messages;
pub mod views;
