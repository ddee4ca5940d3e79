// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::TableExport;
use crate::export::{EventExport, notify_export_success};
use crate::models::AttendanceTable;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Wide attendance table as CSV: `Name`, then `<date> IN|OUT|Hours`.
pub(crate) fn export_table_csv(table: &AttendanceTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(table.headers())?;
    for record in table.records() {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Attendance table as pretty-printed JSON.
pub(crate) fn export_table_json(table: &AttendanceTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&TableExport::from(table))?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Event listing as CSV (header included thanks to serde).
pub(crate) fn export_events_csv(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting events to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in events {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("Events CSV", path);
    Ok(())
}

/// Event listing as pretty-printed JSON.
pub(crate) fn export_events_json(events: &[EventExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting events to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(events)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("Events JSON", path);
    Ok(())
}
