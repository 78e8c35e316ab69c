//! Deadline formatting and parsing.
//!
//! Dates render as `YYYY-MM-DD` and times as 24-hour `HH:MM`, both
//! zero-padded. The parsers accept the same shapes (times also accept
//! `HH:MM:SS`) and are used for CLI input.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[must_use]
pub fn format_date(deadline: &NaiveDateTime) -> String {
    deadline.format(DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_time(deadline: &NaiveDateTime) -> String {
    deadline.format(TIME_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `raw` is not a valid calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|e| CoreError::Validation(format!("invalid date '{raw}' (expected YYYY-MM-DD): {e}")))
}

/// Parse an `HH:MM` or `HH:MM:SS` time of day.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `raw` is not a valid time of day.
pub fn parse_time(raw: &str) -> Result<NaiveTime, CoreError> {
    let raw_trimmed = raw.trim();
    NaiveTime::parse_from_str(raw_trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw_trimmed, "%H:%M:%S"))
        .map_err(|e| CoreError::Validation(format!("invalid time '{raw}' (expected HH:MM): {e}")))
}
