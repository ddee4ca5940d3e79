//! ANSI color helper utilities for terminal output.
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Placeholder shown in the terminal for cells that are empty in the export.
pub const EMPTY_CELL: &str = "--:--";

/// Empty cells become a grey placeholder, everything else is left untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == EMPTY_CELL {
        format!("{GREY}{EMPTY_CELL}{RESET}")
    } else {
        value.to_string()
    }
}

/// IN green, OUT red, empty grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == EMPTY_CELL {
        return format!("{GREY}{EMPTY_CELL}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Strip ANSI escape sequences, for width computations.
pub fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "")
}
