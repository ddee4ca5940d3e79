use crate::models::{AttendanceRow, AttendanceTable, DayAggregate, DayCells};
use std::collections::{BTreeMap, BTreeSet};

/// Pivot day aggregates into one row per person and `IN/OUT/Hours` per date.
///
/// The date axis is the union of every date seen, ascending; a person without
/// punches on one of those dates gets empty cells there.
pub fn build_table(days: &[DayAggregate]) -> AttendanceTable {
    let dates: BTreeSet<&str> = days.iter().map(|d| d.date.as_str()).collect();

    let mut by_name: BTreeMap<&str, BTreeMap<&str, DayCells>> = BTreeMap::new();
    for day in days {
        let cells = DayCells {
            in_time: day.in_str(),
            out_time: day.out_str(),
            hours: day.hours_str(),
        };
        by_name
            .entry(day.name.as_str())
            .or_default()
            .insert(day.date.as_str(), cells);
    }

    let rows = by_name
        .into_iter()
        .map(|(name, mut cells)| AttendanceRow {
            name: name.to_string(),
            days: dates
                .iter()
                .map(|d| cells.remove(d).unwrap_or_default())
                .collect(),
        })
        .collect();

    AttendanceTable {
        dates: dates.into_iter().map(str::to_string).collect(),
        rows,
    }
}
