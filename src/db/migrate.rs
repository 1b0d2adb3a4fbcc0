use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// One schema step. Versions are applied in ascending order, exactly once.
struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_storage",
        sql: r#"
        CREATE TABLE IF NOT EXISTS storage (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 3,
        name: "index_log_operation",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);
        "#,
    },
];

/// Ensure that the `schema_migrations` bookkeeping table exists.
fn ensure_migrations_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )
}

/// Highest applied version, 0 on a fresh database.
pub fn current_version(conn: &Connection) -> AppResult<i64> {
    ensure_migrations_table(conn)?;
    let v: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();
    Ok(v.unwrap_or(0))
}

/// Latest version known by this binary.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

/// Apply every migration newer than the recorded version.
/// Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let current = current_version(conn)?;
    let mut applied = 0;

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        conn.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{} (v{}): {}", m.name, m.version, e)))?;

        conn.execute(
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
            params![m.version, m.name, Local::now().to_rfc3339()],
        )?;

        // the log table exists from v2 on
        if m.version >= 2 {
            crate::db::log::ttlog(
                conn,
                "migration_applied",
                m.name,
                &format!("Schema upgraded to v{}", m.version),
            )?;
        }

        applied += 1;
    }

    if applied > 0 && current > 0 {
        success(format!(
            "Database schema upgraded from v{} to v{}.",
            current,
            latest_version()
        ));
    }

    Ok(applied)
}

