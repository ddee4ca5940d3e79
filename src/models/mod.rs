pub mod attendance_table;
pub mod day_aggregate;
pub mod event_record;
pub mod raw_record;
pub mod upload;

pub use attendance_table::{AttendanceRow, AttendanceTable, DayCells, Field};
pub use day_aggregate::DayAggregate;
pub use event_record::EventRecord;
pub use raw_record::RawRecord;
pub use upload::Upload;
