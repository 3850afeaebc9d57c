// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

fn invalid(r: &str) -> AppError {
    AppError::InvalidDate(format!("unsupported --range '{r}'"))
}

/// First and last day covered by a single period expression.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let (ys, ms) = p.split_once('-').ok_or_else(|| invalid(p))?;
            let y: i32 = ys.parse().map_err(|_| invalid(p))?;
            let m: u32 = ms.parse().map_err(|_| invalid(p))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(p))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(p))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(p))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid(p))?;
            Ok((d, d))
        }
        _ => Err(invalid(p)),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Accepted forms:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// `all` yields `None`.
pub fn parse_range(r: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (start, end) = match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let start = start_raw.trim();
            let end = end_raw.trim();
            if start.len() != end.len() {
                return Err(AppError::InvalidDate(
                    "start and end must have same format".into(),
                ));
            }
            (period_bounds(start)?.0, period_bounds(end)?.1)
        }
        None => period_bounds(r)?,
    };

    if end < start {
        return Err(AppError::InvalidDate(format!("range ends before it starts: {r}")));
    }
    Ok(Some((start, end)))
}
