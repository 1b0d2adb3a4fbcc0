//! Key/value storage table.
//!
//! Every piece of application state is one string value under one key, read
//! and written wholesale: `timesheets` holds the JSON array of records and
//! `user` holds the current session.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TIMESHEETS_KEY: &str = "timesheets";
pub const SESSION_KEY: &str = "user";

pub fn get_item(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM storage WHERE key = ?1")?;
    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn set_item(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
    Ok(())
}

/// Returns true when a value was actually removed.
pub fn remove_item(conn: &Connection, key: &str) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM storage WHERE key = ?1", [key])?;
    Ok(n > 0)
}

/// Decode the JSON value stored under `key`; `None` when the key is absent.
///
/// A present but undecodable value is an error: it is never replaced by an
/// empty default, otherwise the next write would erase the stored data.
pub fn get_json<T: DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Option<T>> {
    match get_item(conn, key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AppError::Storage {
                key: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

pub fn set_json<T: Serialize + ?Sized>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    set_item(conn, key, &raw)
}

/// (key, value size in bytes, updated_at) for every stored key.
pub fn list_keys(conn: &Connection) -> AppResult<Vec<(String, usize, String)>> {
    let mut stmt =
        conn.prepare("SELECT key, LENGTH(value), updated_at FROM storage ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)? as usize,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
