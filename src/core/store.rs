//! The timesheet list: one JSON array under the `timesheets` storage key.

use crate::db::pool::DbPool;
use crate::db::storage::{self, TIMESHEETS_KEY};
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use rusqlite::Connection;

/// Read the whole list. An absent key reads as an empty list.
pub fn load_all(conn: &Connection) -> AppResult<Vec<Timesheet>> {
    Ok(storage::get_json(conn, TIMESHEETS_KEY)?.unwrap_or_default())
}

/// Overwrite the whole list.
pub fn save_all(conn: &Connection, sheets: &[Timesheet]) -> AppResult<()> {
    storage::set_json(conn, TIMESHEETS_KEY, sheets)
}

/// One plus the highest id in the list, or 1 for an empty list.
pub fn next_id(sheets: &[Timesheet]) -> AppResult<u64> {
    match sheets.iter().map(|t| t.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| AppError::Storage {
            key: TIMESHEETS_KEY.to_string(),
            reason: format!("no id left after {max}"),
        }),
    }
}

pub fn find(conn: &Connection, id: u64) -> AppResult<Timesheet> {
    load_all(conn)?
        .into_iter()
        .find(|t| t.id == id)
        .ok_or(AppError::TimesheetNotFound(id))
}

/// Read-modify-write of the list inside a single write transaction.
///
/// `apply` receives the open connection (for audit logging in the same
/// transaction) and the loaded list. The list is written back only when
/// `apply` succeeds; on error nothing is persisted.
pub fn update<F, T>(pool: &mut DbPool, apply: F) -> AppResult<T>
where
    F: FnOnce(&Connection, &mut Vec<Timesheet>) -> AppResult<T>,
{
    pool.with_write_tx(|conn| {
        let mut sheets = load_all(conn)?;
        let out = apply(conn, &mut sheets)?;
        save_all(conn, &sheets)?;
        Ok(out)
    })
}
