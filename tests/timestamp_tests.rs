use chrono::{NaiveDate, NaiveDateTime};
use rattendance::core::timestamp::{clean_datetime, parse_datetime, parse_raw};

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, min, s))
        .expect("valid test datetime")
}

#[test]
fn test_clean_datetime_truncates_annotation() {
    assert_eq!(clean_datetime("2024-01-15 08:00:00...edited"), "2024-01-15 08:00:00");
    assert_eq!(clean_datetime("  2024-01-15 08:00:00  "), "2024-01-15 08:00:00");
    assert_eq!(clean_datetime("2024-01-15 08:00:00 ... a ... b"), "2024-01-15 08:00:00");
    assert_eq!(clean_datetime("...only annotation"), "");
}

#[test]
fn test_parse_iso_and_slash_layouts() {
    let expected = dt(2024, 1, 15, 8, 0, 0);
    for s in [
        "2024-01-15 08:00:00",
        "2024-01-15T08:00:00",
        "2024/01/15 08:00:00",
        "2024/1/15 8:00:00",
        "2024.01.15 08:00",
        "2024/01/15  08:00:00",
    ] {
        assert_eq!(parse_datetime(s, false), Some(expected), "layout {s}");
    }
}

#[test]
fn test_parse_twelve_hour_clock() {
    assert_eq!(
        parse_datetime("01/15/2024 5:30 PM", false),
        Some(dt(2024, 1, 15, 17, 30, 0))
    );
    assert_eq!(
        parse_datetime("2024-01-15 12:05:09 am", false),
        Some(dt(2024, 1, 15, 0, 5, 9))
    );
}

#[test]
fn test_parse_ambiguous_dates_month_first_by_default() {
    assert_eq!(
        parse_datetime("03/04/2024 08:00", false),
        Some(dt(2024, 3, 4, 8, 0, 0))
    );
    assert_eq!(
        parse_datetime("03/04/2024 08:00", true),
        Some(dt(2024, 4, 3, 8, 0, 0))
    );
}

#[test]
fn test_parse_falls_back_when_first_component_cannot_be_a_month() {
    assert_eq!(
        parse_datetime("15/01/2024 08:00:00", false),
        Some(dt(2024, 1, 15, 8, 0, 0))
    );
    assert_eq!(
        parse_datetime("15.01.2024 08:00", false),
        Some(dt(2024, 1, 15, 8, 0, 0))
    );
}

#[test]
fn test_parse_two_digit_year() {
    assert_eq!(
        parse_datetime("01/15/24 08:00", false),
        Some(dt(2024, 1, 15, 8, 0, 0))
    );
}

#[test]
fn test_parse_month_names() {
    let expected = dt(2024, 1, 15, 8, 0, 0);
    assert_eq!(parse_datetime("15 Jan 2024 08:00", false), Some(expected));
    assert_eq!(parse_datetime("Jan 15 2024 08:00:00", false), Some(expected));
    assert_eq!(parse_datetime("January 15, 2024 08:00", false), Some(expected));
}

#[test]
fn test_parse_ctime_and_compact_layouts() {
    assert_eq!(
        parse_datetime("Mon Jan 15 08:00:00 2024", false),
        Some(dt(2024, 1, 15, 8, 0, 0))
    );
    assert_eq!(
        parse_datetime("Mon  Jan  15 08:00:00  2024", false),
        Some(dt(2024, 1, 15, 8, 0, 0))
    );
    assert_eq!(
        parse_datetime("20240115 080000", false),
        Some(dt(2024, 1, 15, 8, 0, 0))
    );
    assert_eq!(
        parse_datetime("20240115T173000", false),
        Some(dt(2024, 1, 15, 17, 30, 0))
    );
    assert_eq!(parse_datetime("20240115", false), Some(dt(2024, 1, 15, 0, 0, 0)));
    // weekday must agree with the date
    assert_eq!(parse_datetime("Tue Jan 15 08:00:00 2024", false), None);
}

#[test]
fn test_date_only_is_midnight() {
    assert_eq!(parse_datetime("2024-01-15", false), Some(dt(2024, 1, 15, 0, 0, 0)));
}

#[test]
fn test_unparsable_values_are_none() {
    for s in ["", "   ", "not a date", "2024-13-45 08:00:00", "08:00:00", "2024-01-15 25:00"] {
        assert_eq!(parse_datetime(s, false), None, "value {s:?}");
    }
}

#[test]
fn test_parse_raw_cleans_then_parses() {
    assert_eq!(
        parse_raw("2024/01/15 17:30:00...(modified by admin)", false),
        Some(dt(2024, 1, 15, 17, 30, 0))
    );
    assert_eq!(parse_raw("bad...2024/01/15 17:30:00", false), None);
}
