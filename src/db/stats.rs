use crate::db::migrate::{current_version, latest_version};
use crate::db::pool::DbPool;
use crate::db::storage::{self, TIMESHEETS_KEY};
use crate::errors::AppResult;
use crate::models::timesheet::Timesheet;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema:{} v{} (latest v{})",
        CYAN,
        RESET,
        current_version(&pool.conn)?,
        latest_version()
    );

    //
    // 2) STORAGE KEYS
    //
    println!("{}• Storage keys:{}", CYAN, RESET);
    let keys = storage::list_keys(&pool.conn)?;
    if keys.is_empty() {
        println!("    {GREY}(none){RESET}");
    }
    for (key, size, updated_at) in keys {
        println!("    {:<12} {:>8} bytes  updated {}", key, size, updated_at);
    }

    //
    // 3) TIMESHEETS + DATE RANGE
    //
    let sheets: Vec<Timesheet> =
        storage::get_json(&pool.conn, TIMESHEETS_KEY)?.unwrap_or_default();
    println!(
        "{}• Timesheets:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        sheets.len(),
        RESET
    );

    let first = sheets.iter().map(|t| t.date.as_str()).min();
    let last = sheets.iter().map(|t| t.date.as_str()).max();
    let fmt_or_dash = |d: Option<&str>| {
        d.map(str::to_string)
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Work dates:{}", CYAN, RESET);
    println!("    from: {}", fmt_or_dash(first));
    println!("    to:   {}", fmt_or_dash(last));

    //
    // 4) AUDIT LOG
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
