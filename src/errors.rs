//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that main.rs can
//! print one consistent `Error: ...` line and exit with status 1.

use crate::models::status::TimesheetStatus;
use crate::models::user::Role;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Corrupted storage key '{key}': {reason}")]
    Storage { key: String, reason: String },

    // ---------------------------
    // Validation (submission form)
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid work date: {0} (must be between 1900-01-01 and today)")]
    DateOutOfRange(String),

    #[error("Invalid hours: {0}")]
    InvalidHours(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown project '{0}'. Run `rtimesheet projects` to see the available ones")]
    UnknownProject(String),

    #[error("Invalid status '{0}'. Use one of: pending, approved, rejected")]
    InvalidStatus(String),

    #[error("Invalid role '{0}'. Use one of: contractor, admin")]
    InvalidRole(String),

    // ---------------------------
    // Timesheet lifecycle
    // ---------------------------
    #[error("Timesheet #{0} not found")]
    TimesheetNotFound(u64),

    #[error("Timesheet #{id} is already {from}; it cannot be {to}")]
    InvalidTransition {
        id: u64,
        from: TimesheetStatus,
        to: TimesheetStatus,
    },

    // ---------------------------
    // Session / role gate
    // ---------------------------
    #[error("Not logged in. Use `rtimesheet login <username>` first")]
    NotLoggedIn,

    #[error("Unknown user '{0}'")]
    UnknownUser(String),

    #[error(
        "This command requires the {required} role; you are logged in as {actual} (available: {hint})",
        hint = .actual.dashboard_hint()
    )]
    Forbidden { required: Role, actual: Role },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
