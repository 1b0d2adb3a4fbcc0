use crate::models::status::TimesheetStatus;
use ansi_term::Colour;

fn icon(status: TimesheetStatus) -> &'static str {
    match status {
        TimesheetStatus::Approved => "✔",
        TimesheetStatus::Rejected => "✘",
        TimesheetStatus::Pending => "⏱",
    }
}

fn colour(status: TimesheetStatus) -> Colour {
    match status {
        TimesheetStatus::Approved => Colour::Green,
        TimesheetStatus::Rejected => Colour::Red,
        TimesheetStatus::Pending => Colour::Yellow,
    }
}

/// Coloured status label with icon, e.g. `✔ Approved`.
pub fn status_badge(status: TimesheetStatus) -> String {
    colour(status)
        .bold()
        .paint(format!("{} {}", icon(status), status.label()))
        .to_string()
}
