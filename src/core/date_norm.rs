//! Calendar dates on the wire are `YYYY-MM-DD` strings with no zone.
//!
//! Dates are built from their year/month/day components only; nothing here
//! goes through UTC, so a date never moves by a day for users west (or east)
//! of Greenwich.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use std::fmt::Write;

pub const WIRE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a calendar date as exactly ten characters, `YYYY-MM-DD`.
pub fn to_wire_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Strict parse of a wire date.
pub fn parse_wire_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if s.len() != 10 {
        return Err(AppError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, WIRE_FORMAT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Rebuild a local date-time from a wire date, anchored at midday.
///
/// Midday keeps the calendar date stable under any UTC offset and DST shift.
/// If local noon does not exist the earliest valid instant after the gap is
/// used.
pub fn from_wire_date(s: &str) -> AppResult<DateTime<Local>> {
    let date = parse_wire_date(s)?;
    let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN));

    match Local.from_local_datetime(&noon) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let shifted = noon + chrono::Duration::hours(1);
            Local
                .from_local_datetime(&shifted)
                .earliest()
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))
        }
    }
}

/// Presentation-only short date (tables, exports).
/// An unusable format string falls back to the wire form.
pub fn to_short_date(date: NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(fmt)).is_err() {
        return to_wire_date(date);
    }
    out
}

/// Optional variant used where an absent date renders as `-`.
pub fn to_short_date_or_dash(date: Option<NaiveDate>, fmt: &str) -> String {
    date.map(|d| to_short_date(d, fmt))
        .unwrap_or_else(|| "-".to_string())
}
