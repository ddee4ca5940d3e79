// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_time::cell_to_excel_serial;
use crate::export::notify_export_success;
use crate::models::{AttendanceTable, Field};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Attendance table as XLSX: styled header, banded rows, real Excel times.
pub(crate) fn export_table_xlsx(table: &AttendanceTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_export_error)?;

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if table.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = table.headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    // header row and the Name column stay visible while scrolling
    worksheet.set_freeze_panes(1, 1).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, row) in table.rows.iter().enumerate() {
        let r = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        write_text_cell(worksheet, r, 0, &row.name, band)?;
        col_widths[0] = col_widths[0].max(row.name.width());

        let mut col: usize = 1;
        for cells in &row.days {
            for field in Field::ALL {
                let v = cells.get(field);
                write_time_cell(worksheet, r, col as u16, field, v, band)?;
                col_widths[col] = col_widths[col].max(v.width());
                col += 1;
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn band_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &band_format(bg))
        .map_err(to_export_error)?;
    Ok(())
}

/// `HH:MM` cells become Excel times; empty cells keep only the band fill.
fn write_time_cell(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    field: Field,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    match cell_to_excel_serial(field, s) {
        Some((num_format, serial)) => {
            let fmt = band_format(bg)
                .set_num_format(num_format)
                .set_align(FormatAlign::Center);
            ws.write_with_format(row, col, serial, &fmt)
                .map_err(to_export_error)?;
        }
        None if s.is_empty() => {
            ws.write_blank(row, col, &band_format(bg))
                .map_err(to_export_error)?;
        }
        None => write_text_cell(ws, row, col, s, bg)?,
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
