//! Week-grouped queries behind the time report.
//!
//! Weeks are bucketed by the local Monday of the interval start, so a
//! week spanning a new year stays a single group.

use crate::errors::AppResult;
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use rusqlite::{Connection, params};

const WEEK_KEY: &str = "date(start_in_milliseconds / 1000, 'unixepoch', 'localtime', 'weekday 0', '-6 days')";

/// One week of intervals: earliest start and the ids it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReportQueryGroup {
    pub week_start: Milliseconds,
    pub ids: Vec<i64>,
}

fn registered_filter(hide_registered: bool) -> &'static str {
    if hide_registered {
        "AND registered = 0"
    } else {
        ""
    }
}

pub fn count_weeks(conn: &Connection, project: &Project, hide_registered: bool) -> AppResult<i64> {
    let sql = format!(
        "SELECT COUNT(*) FROM (
             SELECT 1 FROM time_intervals
             WHERE project_id = ?1 {}
             GROUP BY {WEEK_KEY}
         )",
        registered_filter(hide_registered)
    );

    Ok(conn.query_row(&sql, params![project.id], |row| row.get(0))?)
}

/// Week groups newest first, skipping `position` weeks and returning at
/// most `size`.
pub fn find_weeks(
    conn: &Connection,
    project: &Project,
    hide_registered: bool,
    position: i64,
    size: i64,
) -> AppResult<Vec<TimeReportQueryGroup>> {
    let sql = format!(
        "SELECT MIN(start_in_milliseconds) AS week_start, GROUP_CONCAT(id) AS ids
         FROM (
             SELECT id, start_in_milliseconds FROM time_intervals
             WHERE project_id = ?1 {}
             ORDER BY start_in_milliseconds ASC, id ASC
         )
         GROUP BY {WEEK_KEY}
         ORDER BY week_start DESC
         LIMIT ?2 OFFSET ?3",
        registered_filter(hide_registered)
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![project.id, size, position], |row| {
        let week_start: i64 = row.get(0)?;
        let ids: String = row.get(1)?;
        Ok((week_start, ids))
    })?;

    let mut groups = Vec::new();
    for r in rows {
        let (week_start, ids) = r?;
        groups.push(TimeReportQueryGroup {
            week_start: Milliseconds(week_start),
            ids: parse_ids(&ids),
        });
    }
    Ok(groups)
}

fn parse_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|s| s.trim().parse::<i64>().ok())
        .collect()
}
