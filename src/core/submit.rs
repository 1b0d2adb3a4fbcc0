use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::core::store;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::{Timesheet, TimesheetDraft};
use crate::models::user::{Role, Session};
use crate::utils::date;
use crate::utils::formatting::trim_float;

pub struct SubmitLogic;

impl SubmitLogic {
    /// Validate the submission form. Nothing is read or written here.
    ///
    /// - date: required, `YYYY-MM-DD`, not in the future and not before 1900
    /// - project: required; must be a configured project when the list is not empty
    /// - hours: `0 < hours <= max_hours_per_entry`, a multiple of `hours_step` (0 disables)
    pub fn validate(
        cfg: &Config,
        date_raw: &str,
        project: &str,
        hours: f64,
        comments: Option<&str>,
    ) -> AppResult<TimesheetDraft> {
        if date_raw.trim().is_empty() {
            return Err(AppError::MissingField("date"));
        }
        let d = date::parse_date(date_raw)
            .ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;
        if !date::is_work_date(d) {
            return Err(AppError::DateOutOfRange(date_raw.trim().to_string()));
        }

        let project = project.trim();
        if project.is_empty() {
            return Err(AppError::MissingField("project"));
        }
        let project = if cfg.projects.is_empty() {
            project.to_string()
        } else {
            cfg.projects
                .iter()
                .find(|p| p.eq_ignore_ascii_case(project))
                .cloned()
                .ok_or_else(|| AppError::UnknownProject(project.to_string()))?
        };

        if hours.is_nan() || hours <= 0.0 {
            return Err(AppError::InvalidHours(format!(
                "{} (hours worked must be greater than 0)",
                trim_float(hours)
            )));
        }
        if hours > cfg.max_hours_per_entry {
            return Err(AppError::InvalidHours(format!(
                "{} (at most {} hours per entry)",
                trim_float(hours),
                trim_float(cfg.max_hours_per_entry)
            )));
        }
        if cfg.hours_step > 0.0 {
            let steps = hours / cfg.hours_step;
            if (steps - steps.round()).abs() > 1e-9 {
                return Err(AppError::InvalidHours(format!(
                    "{} (must be a multiple of {})",
                    trim_float(hours),
                    trim_float(cfg.hours_step)
                )));
            }
        }

        Ok(TimesheetDraft {
            date: d,
            project,
            hours_worked: hours,
            comments: comments.unwrap_or("").trim().to_string(),
        })
    }

    /// Append a new pending timesheet for the logged-in contractor.
    pub fn apply(pool: &mut DbPool, session: &Session, draft: TimesheetDraft) -> AppResult<Timesheet> {
        AuthLogic::ensure_role(session, Role::Contractor)?;

        store::update(pool, |conn, sheets| {
            let entry = Timesheet {
                id: store::next_id(sheets)?,
                contractor_id: session.id.clone(),
                contractor_name: session.username.clone(),
                date: draft.date.format("%Y-%m-%d").to_string(),
                project: draft.project,
                hours_worked: draft.hours_worked,
                comments: draft.comments,
                status: TimesheetStatus::Pending,
                submitted_at: date::now_rfc3339(),
                reviewed_at: None,
                reviewed_by: None,
            };

            ttlog(
                conn,
                "submit",
                &format!("#{}", entry.id),
                &format!(
                    "{} submitted {}h for {} on {}",
                    entry.contractor_name,
                    trim_float(entry.hours_worked),
                    entry.project,
                    entry.date
                ),
            )?;

            sheets.push(entry.clone());
            Ok(entry)
        })
    }
}
