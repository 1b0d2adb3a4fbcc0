use crate::core::auth::AuthLogic;
use crate::core::store;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status::TimesheetStatus;
use crate::models::timesheet::Timesheet;
use crate::models::user::{Role, Session};
use crate::utils::date;
use crate::utils::formatting::trim_float;

/// Admin actions on a single timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
    /// Stamp reviewer and time, leave the status as it is.
    Review,
}

impl ReviewAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
            ReviewAction::Review => "review",
        }
    }

    fn target_status(&self) -> Option<TimesheetStatus> {
        match self {
            ReviewAction::Approve => Some(TimesheetStatus::Approved),
            ReviewAction::Reject => Some(TimesheetStatus::Rejected),
            ReviewAction::Review => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOutcome {
    pub action: ReviewAction,
    pub timesheet: Timesheet,
    /// False when the action was a repeat on an already terminal timesheet.
    pub changed: bool,
}

impl ReviewOutcome {
    pub fn message(&self) -> String {
        let t = &self.timesheet;
        if !self.changed {
            return format!("Timesheet #{} is already {}", t.id, t.status);
        }
        match self.action {
            ReviewAction::Approve => format!(
                "Approved timesheet for {} ({}h on {})",
                t.contractor_name,
                trim_float(t.hours_worked),
                t.project
            ),
            ReviewAction::Reject => format!(
                "Rejected timesheet for {} ({}h on {})",
                t.contractor_name,
                trim_float(t.hours_worked),
                t.project
            ),
            ReviewAction::Review => {
                format!("Timesheet for {} marked for review", t.contractor_name)
            }
        }
    }
}

pub struct ReviewLogic;

impl ReviewLogic {
    /// Decide the new state of `ts` for `action`; pure, no I/O.
    ///
    /// - pending → approved / rejected, stamped
    /// - same terminal action again → unchanged, not re-stamped
    /// - opposite terminal action → `InvalidTransition`
    /// - review → stamped, status untouched
    pub fn transition(
        ts: &Timesheet,
        action: ReviewAction,
        reviewer: &str,
        now: &str,
    ) -> AppResult<(Timesheet, bool)> {
        let mut next = ts.clone();

        match action.target_status() {
            Some(target) if ts.status == target => return Ok((next, false)),
            Some(target) if ts.status.is_terminal() => {
                return Err(AppError::InvalidTransition {
                    id: ts.id,
                    from: ts.status,
                    to: target,
                });
            }
            Some(target) => next.status = target,
            None => {}
        }

        next.reviewed_at = Some(now.to_string());
        next.reviewed_by = Some(reviewer.to_string());
        Ok((next, true))
    }

    pub fn apply(
        pool: &mut DbPool,
        session: &Session,
        id: u64,
        action: ReviewAction,
    ) -> AppResult<ReviewOutcome> {
        AuthLogic::ensure_role(session, Role::Admin)?;
        let reviewer = session.shown_name().to_string();
        let now = date::now_rfc3339();

        store::update(pool, |conn, sheets| {
            let slot = sheets
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(AppError::TimesheetNotFound(id))?;

            let (next, changed) = Self::transition(slot, action, &reviewer, &now)?;

            if changed {
                ttlog(
                    conn,
                    action.as_str(),
                    &format!("#{}", id),
                    &format!(
                        "{} by {} (status {})",
                        next.contractor_name, reviewer, next.status
                    ),
                )?;
                *slot = next.clone();
            }

            Ok(ReviewOutcome {
                action,
                timesheet: next,
                changed,
            })
        })
    }
}
