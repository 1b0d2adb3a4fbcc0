// src/export/logic.rs

use crate::core::filter::TimesheetFilter;
use crate::core::store;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::TimesheetExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::describe_period;
use crate::utils::path::absolute_output_path;

/// High-level export of the timesheet list.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the timesheets matching `range` and `status`.
    ///
    /// - `file`: absolute output path (`~` is expanded)
    /// - `range`: `None`, `"all"` or a period (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` in the same form)
    /// - `status`: `None`, `"all"` or one status
    ///
    /// Returns the number of exported records.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        status: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_output_path(file)?;
        let filter = TimesheetFilter::from_args(None, status, None, range)?;

        let all = store::load_all(&pool.conn)?;
        let selected = filter.apply(&all);

        if selected.is_empty() {
            warning("No timesheets found for the selected filters. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Json => export_json(&selected, &path)?,
            ExportFormat::Csv => {
                let rows: Vec<TimesheetExport> =
                    selected.iter().map(|t| TimesheetExport::from(*t)).collect();
                export_csv(&rows, &path)?
            }
            ExportFormat::Xlsx => {
                let rows: Vec<TimesheetExport> =
                    selected.iter().map(|t| TimesheetExport::from(*t)).collect();
                export_xlsx(&rows, &path, &build_title(range))?
            }
        }

        ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} timesheets as {}", selected.len(), format.as_str()),
        )?;

        Ok(selected.len())
    }
}

/// Sheet title from the selected period.
fn build_title(range: Option<&str>) -> String {
    match range {
        Some(r) if !r.trim().is_empty() && !r.eq_ignore_ascii_case("all") => {
            format!("Timesheets for {}", describe_period(r))
        }
        _ => "Timesheets".to_string(),
    }
}
