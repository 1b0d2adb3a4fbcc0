use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::user::Role;
use crate::ui::views::timesheet_detail;

/// Detail view. Contractors only see their own timesheets.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let session = AuthLogic::current(&pool.conn)?;

        let ts = store::find(&pool.conn, *id)?;
        // someone else's timesheet is reported as missing
        if session.role == Role::Contractor && !ts.is_owned_by(&session) {
            return Err(AppError::TimesheetNotFound(*id));
        }

        print!("{}", timesheet_detail(&ts));
    }

    Ok(())
}
