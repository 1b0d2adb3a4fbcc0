pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod mine;
pub mod projects;
pub mod review;
pub mod session;
pub mod show;
pub mod stats;
pub mod submit;
