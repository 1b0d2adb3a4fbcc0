use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::review::{ReviewAction, ReviewLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::{info, toast};

/// `approve`, `reject` and `review`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, action) = match cmd {
        Commands::Approve { id } => (*id, ReviewAction::Approve),
        Commands::Reject { id } => (*id, ReviewAction::Reject),
        Commands::Review { id } => (*id, ReviewAction::Review),
        _ => return Ok(()),
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let session = AuthLogic::require(&pool.conn, Role::Admin)?;

    let outcome = ReviewLogic::apply(&mut pool, &session, id, action)?;

    if outcome.changed {
        toast("Action Completed", outcome.message());
    } else {
        info(outcome.message());
    }

    Ok(())
}
