//! Dashboard renderings: timesheet tables, detail card, summary cards.

use crate::core::stats::StatusSummary;
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::Timesheet;
use crate::ui::badge::status_badge;
use crate::utils::colors::{BOLD, CYAN, GREEN, RED, RESET, YELLOW, colorize_optional};
use crate::utils::date::{format_display, format_timestamp};
use crate::utils::formatting::{format_hours, trim_float};
use crate::utils::table::{Column, Table};

const COMMENT_WIDTH: usize = 32;

/// Table of timesheets. The admin variant adds the contractor column.
pub fn timesheet_table(sheets: &[&Timesheet], with_contractor: bool, separator: &str) -> String {
    let mut columns = vec![Column::right("ID")];
    if with_contractor {
        columns.push(Column::left("Contractor").max(24));
    }
    columns.extend([
        Column::left("Date"),
        Column::left("Project").max(28),
        Column::right("Hours"),
        Column::left("Status"),
        Column::left("Comments").max(COMMENT_WIDTH),
    ]);

    let mut table = Table::new(columns, separator);

    for t in sheets {
        let comments = if t.comments.trim().is_empty() {
            "No comments".to_string()
        } else {
            t.comments.replace('\n', " ")
        };

        let mut row = vec![t.id.to_string()];
        if with_contractor {
            row.push(t.contractor_name.clone());
        }
        row.extend([
            format_display(&t.date),
            t.project.clone(),
            format_hours(t.hours_worked),
            status_badge(t.status),
            comments,
        ]);
        table.add_row(row);
    }

    table.render()
}

/// Full card of one timesheet.
pub fn timesheet_detail(t: &Timesheet) -> String {
    let mut out = String::new();
    let line = |label: &str, value: &str| format!("{CYAN}{:<13}{RESET} {}\n", label, value);

    out.push_str(&format!("{BOLD}Timesheet #{}{RESET}\n", t.id));
    out.push_str(&line("Contractor:", &t.contractor_name));
    out.push_str(&line("Date:", &format_display(&t.date)));
    out.push_str(&line("Project:", &t.project));
    out.push_str(&line("Hours:", &format_hours(t.hours_worked)));
    out.push_str(&line("Status:", &status_badge(t.status)));
    out.push_str(&line("Submitted:", &format_timestamp(&t.submitted_at)));
    out.push_str(&line(
        "Reviewed:",
        &colorize_optional(&t.reviewed_at.as_deref().map(format_timestamp).unwrap_or_else(|| "--".into())),
    ));
    out.push_str(&line(
        "Reviewed by:",
        &colorize_optional(t.reviewed_by.as_deref().unwrap_or("--")),
    ));

    out.push_str(&format!("{CYAN}Comments:{RESET}\n"));
    if t.comments.trim().is_empty() {
        out.push_str(&format!("  {}\n", colorize_optional("--")));
    } else {
        for l in textwrap::wrap(&t.comments, 70) {
            out.push_str(&format!("  {}\n", l));
        }
    }
    out
}

fn card_colour(status: TimesheetStatus) -> &'static str {
    match status {
        TimesheetStatus::Pending => YELLOW,
        TimesheetStatus::Approved => GREEN,
        TimesheetStatus::Rejected => RED,
    }
}

/// Summary cards: one line per status with count and hours.
pub fn summary_cards(summary: &StatusSummary) -> String {
    let mut out = String::new();
    for status in TimesheetStatus::ALL {
        out.push_str(&format!(
            "{}{BOLD}{:<9}{RESET} {:>4}   {:>8}\n",
            card_colour(status),
            status.label(),
            summary.count(status),
            format!("{}h", trim_float(summary.hours(status)))
        ));
    }
    out.push_str(&format!(
        "{BOLD}{:<9}{RESET} {:>4}   {:>8}\n",
        "Total",
        summary.total(),
        format!("{}h", trim_float(summary.total_hours()))
    ));
    out
}
