// src/export/model.rs

use crate::models::timesheet::Timesheet;
use serde::Serialize;

/// Flat row for CSV / XLSX export of a timesheet.
#[derive(Serialize, Clone, Debug)]
pub struct TimesheetExport {
    pub id: u64,
    pub contractor_id: String,
    pub contractor_name: String,
    pub date: String,
    pub project: String,
    pub hours_worked: f64,
    pub comments: String,
    pub status: String,
    pub submitted_at: String,
    pub reviewed_at: String,
    pub reviewed_by: String,
}

impl From<&Timesheet> for TimesheetExport {
    fn from(t: &Timesheet) -> Self {
        Self {
            id: t.id,
            contractor_id: t.contractor_id.clone(),
            contractor_name: t.contractor_name.clone(),
            date: t.date.clone(),
            project: t.project.clone(),
            hours_worked: t.hours_worked,
            comments: t.comments.clone(),
            status: t.status.as_str().to_string(),
            submitted_at: t.submitted_at.clone(),
            reviewed_at: t.reviewed_at.clone().unwrap_or_default(),
            reviewed_by: t.reviewed_by.clone().unwrap_or_default(),
        }
    }
}

/// How a column is written to a spreadsheet cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellKind {
    Text,
    Number,
    Date,
}

/// Header + cell kind per column, in `to_row` order.
pub(crate) const COLUMNS: &[(&str, CellKind)] = &[
    ("id", CellKind::Number),
    ("contractor_id", CellKind::Text),
    ("contractor_name", CellKind::Text),
    ("date", CellKind::Date),
    ("project", CellKind::Text),
    ("hours_worked", CellKind::Number),
    ("comments", CellKind::Text),
    ("status", CellKind::Text),
    ("submitted_at", CellKind::Text),
    ("reviewed_at", CellKind::Text),
    ("reviewed_by", CellKind::Text),
];

pub(crate) fn to_row(e: &TimesheetExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.contractor_id.clone(),
        e.contractor_name.clone(),
        e.date.clone(),
        e.project.clone(),
        e.hours_worked.to_string(),
        e.comments.clone(),
        e.status.clone(),
        e.submitted_at.clone(),
        e.reviewed_at.clone(),
        e.reviewed_by.clone(),
    ]
}
