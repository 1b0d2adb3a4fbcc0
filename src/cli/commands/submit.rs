use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::submit::SubmitLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::{info, toast};
use crate::utils::formatting::trim_float;

/// Submit a new timesheet entry for the logged-in contractor.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        date,
        project,
        hours,
        comment,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1. Role gate
        //
        let session = AuthLogic::require(&pool.conn, Role::Contractor)?;

        //
        // 2. Validate the form (nothing is written on failure)
        //
        let draft = SubmitLogic::validate(cfg, date, project, *hours, comment.as_deref())?;

        //
        // 3. Append
        //
        let entry = SubmitLogic::apply(&mut pool, &session, draft)?;

        toast(
            "Timesheet Submitted",
            format!(
                "Successfully submitted {} hours for {}",
                trim_float(entry.hours_worked),
                entry.project
            ),
        );
        info(format!("Timesheet #{} is pending review.", entry.id));
    }

    Ok(())
}
