use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::format_timestamp;

/// `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Login { username } => {
            let session = AuthLogic::login(&mut pool, cfg, username)?;
            success(format!(
                "Welcome, {} ({})",
                session.shown_name(),
                session.role
            ));
            info(format!("Available commands: {}", session.role.dashboard_hint()));
        }
        Commands::Logout => match AuthLogic::logout(&mut pool)? {
            Some(s) => success(format!("Logged out {}.", s.username)),
            None => info("No active session."),
        },
        Commands::Whoami => {
            let s = AuthLogic::current(&pool.conn)?;
            println!(
                "{} ({}) as {}, since {}",
                s.username,
                s.shown_name(),
                s.role,
                format_timestamp(&s.logged_in_at)
            );
        }
        _ => {}
    }

    Ok(())
}
