// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{COLUMNS, CellKind, TimesheetExport, to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, ExcelDateTime, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and auto column widths.
pub(crate) fn export_xlsx(rows: &[TimesheetExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Timesheets").map_err(to_app_error)?;

    let title_format = Format::new().set_bold().set_font_size(14);
    worksheet
        .write_with_format(0, 0, title, &title_format)
        .map_err(to_app_error)?;

    // ---------------------------
    // Header (row 2, below the title)
    // ---------------------------
    let header_row = 2;
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, (header, _)) in COLUMNS.iter().enumerate() {
        worksheet
            .write_with_format(header_row, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(header_row + 1, 0).ok();

    let mut col_widths: Vec<usize> = COLUMNS
        .iter()
        .map(|(h, _)| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (i, item) in rows.iter().enumerate() {
        let row = header_row + 1 + i as u32;
        let band = if i % 2 == 0 { band1 } else { band2 };

        for (col, value) in to_row(item).iter().enumerate() {
            let kind = COLUMNS[col].1;
            write_cell(worksheet, row, col as u16, value, kind, band)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        // comments can be long; keep the sheet readable
        let w = (*w).min(60);
        worksheet
            .set_column_width(c as u16, w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    kind: CellKind,
    band: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match kind {
        CellKind::Date => {
            if let Ok(dt) = ExcelDateTime::parse_from_str(value) {
                let fmt = base.set_num_format("yyyy-mm-dd");
                worksheet
                    .write_with_format(row, col, &dt, &fmt)
                    .map_err(to_app_error)?;
                return Ok(());
            }
        }
        CellKind::Number => {
            if let Ok(num) = value.parse::<f64>() {
                let fmt = base.set_align(FormatAlign::Right);
                worksheet
                    .write_with_format(row, col, num, &fmt)
                    .map_err(to_app_error)?;
                return Ok(());
            }
        }
        CellKind::Text => {}
    }

    worksheet
        .write_with_format(row, col, value, &base)
        .map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
