// src/export/model.rs

use crate::models::{AttendanceTable, DayCells, EventRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Flat record of the diagnostic event listing.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub name: String,
    pub en_no: String,
    pub in_out: String,
    pub mode: String,
    pub datetime: String,
    pub dt: String,
}

impl From<&EventRecord> for EventExport {
    fn from(ev: &EventRecord) -> Self {
        Self {
            name: ev.name.clone(),
            en_no: ev.employee_no.clone(),
            in_out: ev.in_out.clone().unwrap_or_default(),
            mode: ev.mode.clone().unwrap_or_default(),
            datetime: ev.raw_datetime.clone(),
            dt: ev.dt_str(),
        }
    }
}

impl EventExport {
    /// Column labels of the event listing, as shown in the terminal.
    pub const HEADERS: [&'static str; 6] = ["Name", "EnNo", "In/Out", "Mode", "DateTime", "dt"];

    pub fn into_row(self) -> Vec<String> {
        vec![
            self.name,
            self.en_no,
            self.in_out,
            self.mode,
            self.datetime,
            self.dt,
        ]
    }
}

pub(crate) fn events_to_export(events: &[EventRecord]) -> Vec<EventExport> {
    events.iter().map(EventExport::from).collect()
}

/// Nested JSON shape of the attendance table.
#[derive(Serialize, Clone, Debug)]
pub struct TableExport<'a> {
    pub dates: &'a [String],
    pub rows: Vec<RowExport<'a>>,
}

#[derive(Serialize, Clone, Debug)]
pub struct RowExport<'a> {
    pub name: &'a str,
    pub days: BTreeMap<&'a str, &'a DayCells>,
}

impl<'a> From<&'a AttendanceTable> for TableExport<'a> {
    fn from(table: &'a AttendanceTable) -> Self {
        let rows = table
            .rows
            .iter()
            .map(|row| RowExport {
                name: &row.name,
                days: table
                    .dates
                    .iter()
                    .map(String::as_str)
                    .zip(row.days.iter())
                    .collect(),
            })
            .collect();

        Self {
            dates: &table.dates,
            rows,
        }
    }
}
