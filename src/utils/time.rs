//! Time utilities: parsing the `--at` argument, short time formatting.

use crate::errors::{AppError, AppResult};
use crate::utils::date::local_datetime;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a clock time given as `HH:MM` (on `today`) or `YYYY-MM-DD HH:MM`.
pub fn parse_when(input: &str, today: NaiveDate) -> AppResult<DateTime<Local>> {
    let input = input.trim();

    if let Some(t) = parse_time(input) {
        return Ok(local_datetime(today.and_time(t)));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .map(local_datetime)
        .map_err(|_| AppError::InvalidTime(input.to_string()))
}

pub fn parse_optional_when(
    input: Option<&String>,
    today: NaiveDate,
) -> AppResult<Option<DateTime<Local>>> {
    input.map(|s| parse_when(s, today)).transpose()
}

pub fn format_clock(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}
