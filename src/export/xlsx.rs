// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{AttendanceExport, DATE_COLUMN, export_to_cells, get_headers};
use crate::export::notify_export_success;
use crate::models::attendance::Presence;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) const SHEET_NAME: &str = "Attendance";

/// Export XLSX with a styled header, banded rows and auto column widths.
pub(crate) fn export_xlsx(rows: &[AttendanceExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x007BFF))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xF2F2F2);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, rec) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in export_to_cells(rec).iter().enumerate() {
            let v = value.as_str();
            write_xlsx_cell(worksheet, row, col as u16, v, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::Export("invalid path".into()))?;
    workbook.save(path_str).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// One cell: the date column as an Excel date, presence centred and
/// coloured, the rest as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if usize::from(col) == DATE_COLUMN
        && let Some(serial) = parse_to_excel_date(s)
    {
        let fmt = base.set_num_format("yyyy-mm-dd");
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    let fmt = if s == Presence::Present.as_str() {
        base.set_align(FormatAlign::Center)
            .set_font_color(Color::RGB(0x1E7B34))
    } else if s == Presence::Absent.as_str() {
        base.set_align(FormatAlign::Center)
            .set_font_color(Color::RGB(0x888888))
    } else {
        base
    };

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
