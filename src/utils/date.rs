use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Current local time as RFC 3339, the format of `submittedAt`/`reviewedAt`.
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Work dates run from 1900-01-01 up to today (local time).
pub fn is_work_date(d: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(1900, 1, 1).is_some_and(|min| d >= min)
        && d <= Local::now().date_naive()
}

/// Short human date, e.g. `Jan 5, 2025`. Unparseable input is returned as-is.
pub fn format_display(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Short human timestamp for review stamps, e.g. `Jan 5, 2025 14:03`.
pub fn format_timestamp(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.with_timezone(&Local).format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => ts.to_string(),
    }
}

/// Parse a period into inclusive bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - the same forms as `start:end` (both sides must use the same form)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start, end)) = p.split_once(':') {
        let (start, end) = (start.trim(), end.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "{p}: start and end must have the same format"
            )));
        }
        let (from, _) = single_period(start)?;
        let (_, to) = single_period(end)?;
        if from > to {
            return Err(AppError::InvalidDate(format!("{p}: start is after end")));
        }
        return Ok((from, to));
    }

    single_period(p)
}

fn single_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((first, last_day_of_month(first).ok_or_else(invalid)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

/// Human title for a period, used in list headers and exports.
pub fn describe_period(p: &str) -> String {
    let p = p.trim();
    if let Some((a, b)) = p.split_once(':') {
        return format!("from {} to {}", a.trim(), b.trim());
    }
    match p.len() {
        4 => format!("year {p}"),
        7 => match parse_date(&format!("{p}-01")) {
            Some(d) => d.format("%B %Y").to_string(),
            None => p.to_string(),
        },
        _ => format_display(p),
    }
}
