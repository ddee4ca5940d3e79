use chrono::NaiveDateTime;

/// First-in / last-out summary for one person on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAggregate {
    pub name: String,
    pub date: String,
    pub first_in: Option<NaiveDateTime>,
    pub last_out: Option<NaiveDateTime>,
    pub duration_minutes: Option<i64>,
}

impl DayAggregate {
    pub fn new(
        name: String,
        date: String,
        first_in: Option<NaiveDateTime>,
        last_out: Option<NaiveDateTime>,
    ) -> Self {
        let duration_minutes = match (first_in, last_out) {
            (Some(i), Some(o)) if o >= i => Some((o - i).num_minutes()),
            _ => None,
        };

        Self {
            name,
            date,
            first_in,
            last_out,
            duration_minutes,
        }
    }

    pub fn in_str(&self) -> String {
        self.first_in
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn out_str(&self) -> String {
        self.last_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn hours_str(&self) -> String {
        self.duration_minutes
            .map(crate::utils::formatting::minutes_to_hhmm)
            .unwrap_or_default()
    }
}
