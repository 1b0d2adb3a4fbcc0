use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store;
use crate::db::migrate::{current_version, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use std::collections::HashSet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opening the pool already applies pending migrations
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let applied = run_pending_migrations(&pool.conn)?;
            println!(
                "{}✔ Schema at v{} ({} applied now).{}\n",
                GREEN,
                current_version(&pool.conn)?,
                applied,
                RESET
            );
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ SQLite integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ SQLite integrity check failed:{} {}", RED, RESET, integrity);
            }

            // the stored list must decode and keep ids unique
            let sheets = store::load_all(&pool.conn)?;
            let mut seen = HashSet::new();
            let duplicates: Vec<u64> = sheets
                .iter()
                .filter(|t| !seen.insert(t.id))
                .map(|t| t.id)
                .collect();

            if duplicates.is_empty() {
                println!(
                    "{}✔ {} timesheets, ids unique.{}\n",
                    GREEN,
                    sheets.len(),
                    RESET
                );
            } else {
                println!(
                    "{}✘ Duplicate timesheet ids:{} {:?}\n",
                    RED, RESET, duplicates
                );
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
