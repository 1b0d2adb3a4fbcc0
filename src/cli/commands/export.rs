use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::user::Role;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        status,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        AuthLogic::require(&pool.conn, Role::Admin)?;

        ExportLogic::export(
            &mut pool,
            *format,
            file,
            range.as_deref(),
            status.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
