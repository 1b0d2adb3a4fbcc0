use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;

/// ANSI colour for each audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "submit" => Colour::Cyan,
        "approve" => Colour::Green,
        "reject" => Colour::Red,
        "review" => Colour::Yellow,
        "login" | "logout" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const OP_MAX_WIDTH: usize = 40;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, operation: Option<&str>) -> AppResult<()> {
        let entries = load_log(&pool.conn, operation)?;

        if entries.is_empty() {
            info("The audit log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        println!("📜 Audit log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            let mut op_target = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                op_target.push_str(&format!(" ({})", e.target));
            }

            // keep the coloured operation, cut only the visible text
            let visible = strip_ansi(&op_target);
            if visible.chars().count() > OP_MAX_WIDTH {
                let cut: String = visible.chars().take(OP_MAX_WIDTH - 3).collect();
                op_target = match cut.split_once(' ') {
                    Some((op, rest)) => format!("{} {}...", color.paint(op), rest),
                    None => format!("{}...", color.paint(cut.as_str())),
                };
            }

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                op_target,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
