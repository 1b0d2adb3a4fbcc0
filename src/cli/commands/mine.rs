use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::filter::TimesheetFilter;
use crate::core::stats::StatusSummary;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::timesheet::Timesheet;
use crate::models::user::Role;
use crate::ui::messages::{header, info};
use crate::ui::views::{summary_cards, timesheet_table};

/// Contractor dashboard: the logged-in contractor's own timesheets.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mine { status } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let session = AuthLogic::require(&pool.conn, Role::Contractor)?;

        let filter = TimesheetFilter::from_args(None, status.as_deref(), None, None)?;
        let all = store::load_all(&pool.conn)?;
        let own: Vec<&Timesheet> = all.iter().filter(|t| t.is_owned_by(&session)).collect();
        let shown: Vec<&Timesheet> = own.iter().copied().filter(|t| filter.matches(t)).collect();

        header(format!("My Timesheets ({})", session.shown_name()));

        if own.is_empty() {
            info("No timesheets yet. Submit one with `rtimesheet submit`.");
            return Ok(());
        }

        print!("{}", summary_cards(&StatusSummary::from_sheets(own.iter().copied())));
        println!();

        if shown.is_empty() {
            info("No timesheets match the selected status.");
            return Ok(());
        }

        print!("{}", timesheet_table(&shown, false, &cfg.separator_char));
    }

    Ok(())
}
