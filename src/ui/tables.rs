//! Terminal rendering of the attendance table and the event listing.

use crate::export::EventExport;
use crate::models::{AttendanceTable, EventRecord, Field};
use crate::ui::messages::color_enabled;
use crate::utils::colors::{CYAN, EMPTY_CELL, RESET, colorize_in_out, colorize_optional};
use crate::utils::table::Table;

fn paint(field: Field, value: &str) -> String {
    if !color_enabled() {
        return if value.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            value.to_string()
        };
    }

    match field {
        Field::In => colorize_in_out(value, true),
        Field::Out => colorize_in_out(value, false),
        Field::Hours => colorize_optional(value),
    }
}

pub fn render_attendance(table: &AttendanceTable) -> String {
    let mut out = Table::new(table.headers());

    for row in &table.rows {
        let mut cells = Vec::with_capacity(1 + row.days.len() * Field::ALL.len());
        if color_enabled() {
            cells.push(format!("{CYAN}{}{RESET}", row.name));
        } else {
            cells.push(row.name.clone());
        }
        for day in &row.days {
            for field in Field::ALL {
                cells.push(paint(field, day.get(field)));
            }
        }
        out.add_row(cells);
    }

    out.render()
}

pub fn render_events(events: &[EventRecord]) -> String {
    let headers = EventExport::HEADERS.iter().map(|h| h.to_string()).collect();
    let mut out = Table::new(headers);

    for ev in events {
        out.add_row(EventExport::from(ev).into_row());
    }

    out.render()
}
