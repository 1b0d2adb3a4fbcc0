pub mod auth;
pub mod backup;
pub mod filter;
pub mod log;
pub mod review;
pub mod stats;
pub mod store;
pub mod submit;
