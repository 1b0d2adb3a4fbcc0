use crate::db::migrate::run_pending_migrations;
use crate::db::storage::{self, TIMESHEETS_KEY};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Schema comes from the migration engine; the timesheet list is seeded as an
/// empty array so that the key is always present after `init`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    if storage::get_item(conn, TIMESHEETS_KEY)?.is_none() {
        storage::set_item(conn, TIMESHEETS_KEY, "[]")?;
    }

    Ok(())
}
