use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::filter::TimesheetFilter;
use crate::core::stats::StatusSummary;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::{header, info};
use crate::ui::views::{summary_cards, timesheet_table};
use crate::utils::date::describe_period;

/// Admin dashboard: every timesheet, filtered.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        status,
        contractor,
        period,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        AuthLogic::require(&pool.conn, Role::Admin)?;

        let filter = TimesheetFilter::from_args(
            search.as_deref(),
            status.as_deref(),
            contractor.as_deref(),
            period.as_deref(),
        )?;

        let all = store::load_all(&pool.conn)?;
        let shown = filter.apply(&all);

        match period.as_deref() {
            Some(p) if filter.period.is_some() => {
                header(format!("Timesheet Review for {}", describe_period(p)))
            }
            _ => header("Timesheet Review"),
        }

        print!("{}", summary_cards(&StatusSummary::from_sheets(&all)));
        println!();

        println!("{} of {} timesheets", shown.len(), all.len());
        if shown.is_empty() {
            info("No timesheets match the current filters.");
            return Ok(());
        }

        println!();
        print!("{}", timesheet_table(&shown, true, &cfg.separator_char));
    }

    Ok(())
}
