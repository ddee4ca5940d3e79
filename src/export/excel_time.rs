// src/export/excel_time.rs

use crate::models::Field;
use chrono::{NaiveTime, Timelike};

/// Excel number format for clock times (IN / OUT).
pub(crate) const CLOCK_FORMAT: &str = "hh:mm";
/// Excel number format for elapsed time; brackets keep 24h+ from wrapping.
pub(crate) const DURATION_FORMAT: &str = "[hh]:mm";

/// `HH:MM` cell → (number format, Excel day fraction). `None` for empty/invalid cells.
pub(crate) fn cell_to_excel_serial(field: Field, s: &str) -> Option<(&'static str, f64)> {
    match field {
        Field::In | Field::Out => {
            let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
            let seconds = t.num_seconds_from_midnight() as f64;
            Some((CLOCK_FORMAT, seconds / 86400.0))
        }
        Field::Hours => {
            let (h, m) = s.split_once(':')?;
            let h: u32 = h.parse().ok()?;
            let m: u32 = m.parse().ok()?;
            if m >= 60 {
                return None;
            }
            Some((DURATION_FORMAT, f64::from(h * 60 + m) / 1440.0))
        }
    }
}
