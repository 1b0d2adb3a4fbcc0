use crate::models::status::TimesheetStatus;
use crate::models::timesheet::Timesheet;

/// Summary cards of the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending_hours: f64,
    pub approved_hours: f64,
    pub rejected_hours: f64,
}

impl StatusSummary {
    pub fn from_sheets<'a, I>(sheets: I) -> Self
    where
        I: IntoIterator<Item = &'a Timesheet>,
    {
        let mut s = StatusSummary::default();
        for t in sheets {
            match t.status {
                TimesheetStatus::Pending => {
                    s.pending += 1;
                    s.pending_hours += t.hours_worked;
                }
                TimesheetStatus::Approved => {
                    s.approved += 1;
                    s.approved_hours += t.hours_worked;
                }
                TimesheetStatus::Rejected => {
                    s.rejected += 1;
                    s.rejected_hours += t.hours_worked;
                }
            }
        }
        s
    }

    pub fn count(&self, status: TimesheetStatus) -> usize {
        match status {
            TimesheetStatus::Pending => self.pending,
            TimesheetStatus::Approved => self.approved,
            TimesheetStatus::Rejected => self.rejected,
        }
    }

    pub fn hours(&self, status: TimesheetStatus) -> f64 {
        match status {
            TimesheetStatus::Pending => self.pending_hours,
            TimesheetStatus::Approved => self.approved_hours,
            TimesheetStatus::Rejected => self.rejected_hours,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }

    pub fn total_hours(&self) -> f64 {
        self.pending_hours + self.approved_hours + self.rejected_hours
    }
}
