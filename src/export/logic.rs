// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{
    export_events_csv, export_events_json, export_table_csv, export_table_json,
};
use crate::export::model::events_to_export;
use crate::export::xlsx::export_table_xlsx;
use crate::models::{AttendanceTable, EventRecord};
use crate::ui::messages::warning;
use crate::utils::path;
use std::path::PathBuf;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the attendance table.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path; relative paths land in the working directory
    /// - `force`: overwrite without asking
    pub fn export_table(
        table: &AttendanceTable,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = path::resolve(file)?;

        if table.is_empty() {
            warning("No attendance rows to export.");
            return Ok(path);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_table_csv(table, &path)?,
            ExportFormat::Json => export_table_json(table, &path)?,
            ExportFormat::Xlsx => export_table_xlsx(table, &path)?,
        }

        Ok(path)
    }

    /// Write the filtered, de-bursted event listing (csv | json).
    pub fn export_events(
        events: &[EventRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = path::resolve(file)?;

        if events.is_empty() {
            warning("No events to export.");
            return Ok(path);
        }

        ensure_writable(&path, force)?;

        let rows = events_to_export(events);
        match format {
            ExportFormat::Csv => export_events_csv(&rows, &path)?,
            ExportFormat::Json => export_events_json(&rows, &path)?,
            ExportFormat::Xlsx => {
                return Err(AppError::InvalidExportFormat(format!(
                    "{} (event listings support csv and json)",
                    format.as_str()
                )));
            }
        }

        Ok(path)
    }
}
