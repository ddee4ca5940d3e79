pub mod days;
pub mod pivot;

use crate::models::{AttendanceTable, EventRecord};

pub use days::aggregate_days;
pub use pivot::build_table;

/// Events → wide attendance table.
pub fn aggregate(events: &[EventRecord]) -> AttendanceTable {
    build_table(&aggregate_days(events))
}
