//! Free-form timestamp parsing for the `DateTime` column.
//!
//! Devices write whatever their locale prefers (`2024-01-15 08:00:00`,
//! `01/15/2024 8:00 AM`, `15.01.2024 08:00`...) and sometimes append an
//! annotation after `...`. Parsing is best-effort: `None` means "drop the row".

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Marker after which devices append free text to the timestamp.
pub const ANNOTATION_MARKER: &str = "...";

static YMD_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d"];
static MDY_FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y", "%m.%d.%Y"];
static DMY_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
static MDY_SHORT_FORMATS: &[&str] = &["%m/%d/%y", "%m-%d-%y", "%m.%d.%y"];
static DMY_SHORT_FORMATS: &[&str] = &["%d/%m/%y", "%d-%m-%y", "%d.%m.%y"];
static TEXT_MONTH_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%d-%b-%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
];

static TIME_FORMATS: &[&str] = &[
    "%H:%M:%S%.f",
    "%H:%M",
    "%I:%M:%S %p",
    "%I:%M %p",
    "%I:%M:%S%p",
    "%I:%M%p",
    "%H%M%S",
];

/// Layouts where the date and the time are interleaved (C `ctime` style).
static WHOLE_FORMATS: &[&str] = &["%a %b %d %H:%M:%S %Y", "%b %d %H:%M:%S %Y"];

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Strip the device annotation (everything from the first `...`) and surrounding blanks.
pub fn clean_datetime(raw: &str) -> &str {
    raw.split(ANNOTATION_MARKER).next().unwrap_or_default().trim()
}

/// Parse a cleaned timestamp.
///
/// Ambiguous numeric dates are read month-first unless `day_first`; the other
/// order is tried when the preferred one cannot produce a valid date.
pub fn parse_datetime(value: &str, day_first: bool) -> Option<NaiveDateTime> {
    let normalized = whitespace().replace_all(value.trim(), " ");
    let s: &str = &normalized;
    if s.is_empty() {
        return None;
    }

    let (first, second) = if day_first {
        (DMY_FORMATS, MDY_FORMATS)
    } else {
        (MDY_FORMATS, DMY_FORMATS)
    };
    let (first_short, second_short) = if day_first {
        (DMY_SHORT_FORMATS, MDY_SHORT_FORMATS)
    } else {
        (MDY_SHORT_FORMATS, DMY_SHORT_FORMATS)
    };

    for fmt in WHOLE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    let long_year_groups = [YMD_FORMATS, first, second, TEXT_MONTH_FORMATS];
    for group in long_year_groups {
        if let Some(dt) = try_group(s, group, true) {
            return Some(dt);
        }
    }

    for group in [first_short, second_short] {
        if let Some(dt) = try_group(s, group, false) {
            return Some(dt);
        }
    }

    None
}

/// Convenience for the parser: clean, then parse.
pub fn parse_raw(raw: &str, day_first: bool) -> Option<NaiveDateTime> {
    parse_datetime(clean_datetime(raw), day_first)
}

fn try_group(s: &str, date_formats: &[&str], four_digit_year: bool) -> Option<NaiveDateTime> {
    for date_fmt in date_formats {
        if let Some(dt) = try_date_format(s, date_fmt)
            && (!four_digit_year || dt.year() >= 1000)
        {
            return Some(dt);
        }
    }
    None
}

fn try_date_format(s: &str, date_fmt: &str) -> Option<NaiveDateTime> {
    if let Ok(d) = NaiveDate::parse_from_str(s, date_fmt) {
        return Some(d.and_time(NaiveTime::MIN));
    }

    for sep in [" ", "T"] {
        for time_fmt in TIME_FORMATS {
            let fmt = format!("{date_fmt}{sep}{time_fmt}");
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, &fmt) {
                return Some(dt);
            }
        }
    }

    None
}
