use crate::models::{DayAggregate, EventRecord};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
struct Span {
    first: NaiveDateTime,
    last: NaiveDateTime,
}

impl Span {
    fn start(ts: NaiveDateTime) -> Self {
        Self {
            first: ts,
            last: ts,
        }
    }

    fn extend(&mut self, ts: NaiveDateTime) {
        self.first = self.first.min(ts);
        self.last = self.last.max(ts);
    }
}

/// Group events by `(name, date)`: IN is the earliest punch, OUT the latest.
///
/// The `In/Out` and `Mode` columns play no part here; a day is simply
/// bounded by the first and last punch seen. Output is sorted by name, then date.
pub fn aggregate_days(events: &[EventRecord]) -> Vec<DayAggregate> {
    let mut spans: BTreeMap<(&str, &str), Span> = BTreeMap::new();

    for ev in events {
        spans
            .entry((ev.name.as_str(), ev.date.as_str()))
            .and_modify(|s| s.extend(ev.timestamp))
            .or_insert_with(|| Span::start(ev.timestamp));
    }

    spans
        .into_iter()
        .map(|((name, date), span)| {
            DayAggregate::new(
                name.to_string(),
                date.to_string(),
                Some(span.first),
                Some(span.last),
            )
        })
        .collect()
}
