use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::filter::contractors;
use crate::core::stats::StatusSummary;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::Role;
use crate::ui::messages::{header, info};
use crate::ui::views::summary_cards;

/// `stats`: admin summary cards.
pub fn handle_stats(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    AuthLogic::require(&pool.conn, Role::Admin)?;

    let all = store::load_all(&pool.conn)?;

    header("Timesheet Summary");
    print!("{}", summary_cards(&StatusSummary::from_sheets(&all)));
    Ok(())
}

/// `contractors`: unique contractor names.
pub fn handle_contractors(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    AuthLogic::require(&pool.conn, Role::Admin)?;

    let all = store::load_all(&pool.conn)?;
    let names = contractors(&all);

    if names.is_empty() {
        info("No contractor has submitted a timesheet yet.");
        return Ok(());
    }

    println!("👷 Contractors:");
    for name in names {
        let count = all.iter().filter(|t| t.contractor_name == name).count();
        println!("  - {} ({} timesheets)", name, count);
    }
    Ok(())
}
