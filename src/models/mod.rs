pub mod status;
pub mod timesheet;
pub mod user;
