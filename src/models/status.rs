use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval status of a timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Rejected,
}

impl TimesheetStatus {
    pub const ALL: [TimesheetStatus; 3] = [
        TimesheetStatus::Pending,
        TimesheetStatus::Approved,
        TimesheetStatus::Rejected,
    ];

    /// Convert enum → storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            TimesheetStatus::Pending => "pending",
            TimesheetStatus::Approved => "approved",
            TimesheetStatus::Rejected => "rejected",
        }
    }

    /// Capitalized label used by badges and summary cards.
    pub fn label(&self) -> &'static str {
        match self {
            TimesheetStatus::Pending => "Pending",
            TimesheetStatus::Approved => "Approved",
            TimesheetStatus::Rejected => "Rejected",
        }
    }

    /// Approved and rejected are final: only a pending timesheet can move.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TimesheetStatus::Pending)
    }
}

impl fmt::Display for TimesheetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimesheetStatus {
    type Err = crate::errors::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "p" => Ok(TimesheetStatus::Pending),
            "approved" | "a" => Ok(TimesheetStatus::Approved),
            "rejected" | "r" => Ok(TimesheetStatus::Rejected),
            _ => Err(crate::errors::AppError::InvalidStatus(s.to_string())),
        }
    }
}
