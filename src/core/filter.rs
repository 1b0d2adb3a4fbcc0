use crate::errors::AppResult;
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::Timesheet;
use crate::utils::date;
use chrono::NaiveDate;

/// Admin dashboard filters. Every field is optional; a timesheet is kept
/// when it satisfies all the present ones, so the order of the predicates
/// never matters.
#[derive(Debug, Clone, Default)]
pub struct TimesheetFilter {
    /// Case-insensitive substring over contractor name, project and comments.
    pub search: Option<String>,
    pub status: Option<TimesheetStatus>,
    /// Exact contractor name.
    pub contractor: Option<String>,
    /// Inclusive work-date bounds.
    pub period: Option<(NaiveDate, NaiveDate)>,
}

impl TimesheetFilter {
    /// Build from raw CLI values; `"all"` disables status/contractor/period.
    pub fn from_args(
        search: Option<&str>,
        status: Option<&str>,
        contractor: Option<&str>,
        period: Option<&str>,
    ) -> AppResult<Self> {
        let not_all = |v: &&str| !v.trim().is_empty() && !v.trim().eq_ignore_ascii_case("all");

        Ok(Self {
            search: search.filter(|s| !s.is_empty()).map(str::to_string),
            status: status
                .filter(not_all)
                .map(str::parse::<TimesheetStatus>)
                .transpose()?,
            contractor: contractor.filter(not_all).map(str::to_string),
            period: period.filter(not_all).map(date::parse_period).transpose()?,
        })
    }

    pub fn matches_search(&self, ts: &Timesheet) -> bool {
        match &self.search {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                ts.contractor_name.to_lowercase().contains(&term)
                    || ts.project.to_lowercase().contains(&term)
                    || ts.comments.to_lowercase().contains(&term)
            }
        }
    }

    pub fn matches_status(&self, ts: &Timesheet) -> bool {
        self.status.is_none_or(|s| ts.status == s)
    }

    pub fn matches_contractor(&self, ts: &Timesheet) -> bool {
        self.contractor
            .as_deref()
            .is_none_or(|c| ts.contractor_name == c)
    }

    pub fn matches_period(&self, ts: &Timesheet) -> bool {
        match self.period {
            None => true,
            Some((from, to)) => {
                date::parse_date(&ts.date).is_some_and(|d| d >= from && d <= to)
            }
        }
    }

    pub fn matches(&self, ts: &Timesheet) -> bool {
        self.matches_search(ts)
            && self.matches_status(ts)
            && self.matches_contractor(ts)
            && self.matches_period(ts)
    }

    /// Matching timesheets in stored order.
    pub fn apply<'a>(&self, sheets: &'a [Timesheet]) -> Vec<&'a Timesheet> {
        sheets.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Unique contractor names in first-seen order.
pub fn contractors(sheets: &[Timesheet]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for t in sheets {
        if !out.contains(&t.contractor_name) {
            out.push(t.contractor_name.clone());
        }
    }
    out
}
