//! Login stub: accounts come from the configuration, there is no password.
//! The session is remembered under the `user` storage key.

use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::storage::{self, SESSION_KEY};
use crate::errors::{AppError, AppResult};
use crate::models::user::{Role, Session};
use crate::utils::date;
use rusqlite::Connection;

pub struct AuthLogic;

impl AuthLogic {
    pub fn login(pool: &mut DbPool, cfg: &Config, username: &str) -> AppResult<Session> {
        let account = cfg
            .find_user(username)
            .ok_or_else(|| AppError::UnknownUser(username.trim().to_string()))?;

        let session = Session {
            id: account.id.clone(),
            username: account.username.clone(),
            display_name: account.display_name.clone(),
            role: account.role,
            logged_in_at: date::now_rfc3339(),
        };

        pool.with_write_tx(|conn| {
            storage::set_json(conn, SESSION_KEY, &session)?;
            ttlog(conn, "login", &session.username, &format!("role {}", session.role))
        })?;

        Ok(session)
    }

    /// Forget the current session. Returns the session that was removed, if any.
    pub fn logout(pool: &mut DbPool) -> AppResult<Option<Session>> {
        pool.with_write_tx(|conn| {
            let previous = Self::current_opt(conn)?;
            if let Some(s) = &previous {
                storage::remove_item(conn, SESSION_KEY)?;
                ttlog(conn, "logout", &s.username, "session closed")?;
            }
            Ok(previous)
        })
    }

    pub fn current_opt(conn: &Connection) -> AppResult<Option<Session>> {
        storage::get_json(conn, SESSION_KEY)
    }

    pub fn current(conn: &Connection) -> AppResult<Session> {
        Self::current_opt(conn)?.ok_or(AppError::NotLoggedIn)
    }

    /// Role gate in front of every dashboard command.
    pub fn require(conn: &Connection, role: Role) -> AppResult<Session> {
        let session = Self::current(conn)?;
        Self::ensure_role(&session, role)?;
        Ok(session)
    }

    pub fn ensure_role(session: &Session, role: Role) -> AppResult<()> {
        if session.role != role {
            return Err(AppError::Forbidden {
                required: role,
                actual: session.role,
            });
        }
        Ok(())
    }
}
