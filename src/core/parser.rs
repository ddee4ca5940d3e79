//! Text → validated, de-bursted punch events.

use crate::core::timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::{EventRecord, RawRecord};
use std::collections::HashSet;

pub const COL_NAME: &str = "Name";
pub const COL_EN_NO: &str = "EnNo";
pub const COL_DATETIME: &str = "DateTime";
pub const COL_IN_OUT: &str = "In/Out";
pub const COL_MODE: &str = "Mode";

pub const REQUIRED_COLUMNS: &[&str] = &[COL_NAME, COL_EN_NO, COL_DATETIME];

/// Badge number the device writes for punches not bound to an employee.
pub const UNASSIGNED_EN_NO: &str = "00000000";

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub day_first: bool,
}

/// Counters for rows silently left out of the event sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub data_lines: usize,
    pub blank_name: usize,
    pub unassigned_badge: usize,
    pub bad_timestamp: usize,
    pub burst_duplicates: usize,
}

impl PipelineStats {
    pub fn dropped(&self) -> usize {
        self.blank_name + self.unassigned_badge + self.bad_timestamp + self.burst_duplicates
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedEvents {
    pub events: Vec<EventRecord>,
    pub stats: PipelineStats,
}

/// Why a raw record did not become an event.
enum Rejection {
    BlankName,
    UnassignedBadge,
    BadTimestamp,
}

/// Split the header line into column names.
pub fn parse_header(line: &str) -> AppResult<Vec<String>> {
    let header: Vec<String> = line
        .trim()
        .split('\t')
        .map(|c| c.trim().to_string())
        .collect();

    if header.iter().all(|c| c.is_empty()) {
        return Err(AppError::MalformedHeader);
    }

    for required in REQUIRED_COLUMNS {
        if !header.iter().any(|c| c == required) {
            return Err(AppError::MissingColumn(required.to_string()));
        }
    }

    Ok(header)
}

/// Header plus one `RawRecord` per non-empty data line.
///
/// `\r\n`, `\n` and a lone `\r` all end a line; the empty pieces a CRLF
/// leaves behind are skipped with the blank lines.
pub fn parse_records(text: &str) -> AppResult<(Vec<String>, Vec<RawRecord>)> {
    let mut lines = text
        .split(['\r', '\n'])
        .filter(|l| !l.trim().is_empty());

    let header = match lines.next() {
        Some(line) => parse_header(line)?,
        None => return Err(AppError::MalformedHeader),
    };

    let records = lines
        .map(|line| {
            let values: Vec<&str> = line.trim().split('\t').collect();
            RawRecord::from_line(&header, &values)
        })
        .collect();

    Ok((header, records))
}

/// Parse, filter, clean and de-burst. Output is sorted by timestamp.
pub fn parse(text: &str, opts: ParseOptions) -> AppResult<ParsedEvents> {
    let (_, records) = parse_records(text)?;

    let mut stats = PipelineStats {
        data_lines: records.len(),
        ..Default::default()
    };

    let mut events = Vec::with_capacity(records.len());
    for (idx, rec) in records.iter().enumerate() {
        match to_event(rec, opts) {
            Ok(ev) => events.push(ev),
            Err(Rejection::BlankName) => {
                tracing::trace!(record = idx + 1, "dropped: blank name");
                stats.blank_name += 1;
            }
            Err(Rejection::UnassignedBadge) => {
                tracing::trace!(record = idx + 1, "dropped: unassigned badge");
                stats.unassigned_badge += 1;
            }
            Err(Rejection::BadTimestamp) => {
                tracing::trace!(
                    record = idx + 1,
                    value = rec.get(COL_DATETIME).unwrap_or_default(),
                    "dropped: unparsable timestamp"
                );
                stats.bad_timestamp += 1;
            }
        }
    }

    let before = events.len();
    let events = debounce(events);
    stats.burst_duplicates = before - events.len();

    tracing::debug!(
        lines = stats.data_lines,
        kept = events.len(),
        blank_name = stats.blank_name,
        unassigned_badge = stats.unassigned_badge,
        bad_timestamp = stats.bad_timestamp,
        burst_duplicates = stats.burst_duplicates,
        "rows parsed"
    );

    Ok(ParsedEvents { events, stats })
}

fn to_event(rec: &RawRecord, opts: ParseOptions) -> Result<EventRecord, Rejection> {
    let name = rec
        .get(COL_NAME)
        .filter(|n| !n.is_empty())
        .ok_or(Rejection::BlankName)?;

    let en_no = rec.get(COL_EN_NO).unwrap_or_default();
    if en_no == UNASSIGNED_EN_NO {
        return Err(Rejection::UnassignedBadge);
    }

    let raw_dt = rec.get(COL_DATETIME).unwrap_or_default();
    let ts = timestamp::parse_raw(raw_dt, opts.day_first).ok_or(Rejection::BadTimestamp)?;

    Ok(EventRecord::new(
        name.to_string(),
        en_no.to_string(),
        rec.get(COL_IN_OUT).map(str::to_string),
        rec.get(COL_MODE).map(str::to_string),
        raw_dt.to_string(),
        ts,
    ))
}

/// Sort by timestamp (stable) and keep only the first punch per
/// person, day and second.
pub fn debounce(mut events: Vec<EventRecord>) -> Vec<EventRecord> {
    events.sort_by_key(|e| e.timestamp);

    let mut seen: HashSet<(String, String, String)> = HashSet::with_capacity(events.len());
    events.retain(|e| {
        let (name, date, time) = e.burst_key();
        seen.insert((name.to_string(), date.to_string(), time.to_string()))
    });

    events
}
