//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

/// Zero-padded `HH:MM` for a non-negative minute count (e.g. 570 → "09:30").
pub fn minutes_to_hhmm(mins: i64) -> String {
    let m = mins.max(0);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Short human summary of a run, e.g. "12 events from 15 rows (3 dropped)".
pub fn describe_stats(stats: &crate::core::PipelineStats, events: usize) -> String {
    let dropped = stats.dropped();
    if dropped == 0 {
        return format!("{} events from {} rows", events, stats.data_lines);
    }

    let mut reasons = Vec::new();
    if stats.blank_name > 0 {
        reasons.push(format!("{} blank name", stats.blank_name));
    }
    if stats.unassigned_badge > 0 {
        reasons.push(format!("{} unassigned badge", stats.unassigned_badge));
    }
    if stats.bad_timestamp > 0 {
        reasons.push(format!("{} bad timestamp", stats.bad_timestamp));
    }
    if stats.burst_duplicates > 0 {
        reasons.push(format!("{} burst duplicate", stats.burst_duplicates));
    }

    format!(
        "{} events from {} rows ({} dropped: {})",
        events,
        stats.data_lines,
        dropped,
        reasons.join(", ")
    )
}
