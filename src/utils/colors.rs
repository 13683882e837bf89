//! ANSI color helper utilities for terminal output.

use crate::models::backup_log::Shift;
use crate::models::logbook_entry::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Pending => YELLOW,
        Status::InProgress => CYAN,
        Status::Completed => GREEN,
    }
}

pub fn color_for_shift(shift: Shift) -> &'static str {
    match shift {
        Shift::Pagi => BLUE,
        Shift::Siang => YELLOW,
        Shift::Sore => MAGENTA,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Placeholder cells (`-`, empty) render grey.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
