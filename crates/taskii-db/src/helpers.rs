//! Row-to-entity parsing helpers.
//!
//! SQLite has no boolean or datetime column types. Flags are stored as
//! `INTEGER` 0/1 and deadlines as `TEXT` in [`DEADLINE_FORMAT`], which sorts
//! chronologically.

use chrono::NaiveDateTime;

use crate::error::DatabaseError;

/// Storage format of task deadlines.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a deadline for a TEXT column.
#[must_use]
pub fn format_deadline(deadline: &NaiveDateTime) -> String {
    deadline.format(DEADLINE_FORMAT).to_string()
}

/// Parse a deadline TEXT column.
///
/// Accepts [`DEADLINE_FORMAT`] and the ISO 8601 `T`-separated form.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string matches neither format.
pub fn parse_deadline(s: &str) -> Result<NaiveDateTime, DatabaseError> {
    NaiveDateTime::parse_from_str(s, DEADLINE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse deadline '{s}': {e}")))
}

/// Read an `INTEGER` 0/1 column as a flag.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Escape `%`, `_` and `\` so user text matches literally inside `LIKE ... ESCAPE '\'`.
#[must_use]
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
