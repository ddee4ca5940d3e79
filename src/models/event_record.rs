use chrono::NaiveDateTime;
use serde::Serialize;

/// A validated punch that survived filtering, timestamp cleaning and de-bursting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub employee_no: String,
    pub in_out: Option<String>, // ⇔ "In/Out" column, display only
    pub mode: Option<String>,   // ⇔ "Mode" column, display only
    pub raw_datetime: String,   // ⇔ "DateTime" column, as exported
    pub timestamp: NaiveDateTime,
    pub date: String,        // "YYYY-MM-DD"
    pub time_of_day: String, // "HH:MM:SS"
}

impl EventRecord {
    pub fn new(
        name: String,
        employee_no: String,
        in_out: Option<String>,
        mode: Option<String>,
        raw_datetime: String,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            name,
            employee_no,
            in_out,
            mode,
            raw_datetime,
            date: timestamp.format("%Y-%m-%d").to_string(),
            time_of_day: timestamp.format("%H:%M:%S").to_string(),
            timestamp,
        }
    }

    /// Identity used to collapse bursts: same person, same calendar day, same second.
    pub fn burst_key(&self) -> (&str, &str, &str) {
        (&self.name, &self.date, &self.time_of_day)
    }

    pub fn dt_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
