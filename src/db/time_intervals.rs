//! Queries on the `time_intervals` table.
//!
//! A stop value of `0` marks the interval as active.

use crate::errors::{AppError, AppResult};
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use crate::models::time_interval::{NewTimeInterval, TimeInterval};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

const COLUMNS: &str = "id, project_id, start_in_milliseconds, stop_in_milliseconds, registered";

/// Row → TimeInterval, shared by every query in this module.
pub(crate) fn map_row(row: &Row<'_>) -> rusqlite::Result<TimeInterval> {
    let id: i64 = row.get(0)?;
    let project_id: i64 = row.get(1)?;
    let start: i64 = row.get(2)?;
    let stop: i64 = row.get(3)?;
    let registered: bool = row.get(4)?;

    let stop = if stop == 0 {
        None
    } else {
        Some(Milliseconds(stop))
    };

    TimeInterval::from_parts(id, project_id, Milliseconds(start), stop, registered)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e)))
}

fn collect(
    rows: impl Iterator<Item = rusqlite::Result<TimeInterval>>,
) -> AppResult<Vec<TimeInterval>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Intervals starting at or after `since`, plus any active interval.
pub fn find_all(
    conn: &Connection,
    project: &Project,
    since: Milliseconds,
) -> AppResult<Vec<TimeInterval>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {COLUMNS} FROM time_intervals
         WHERE project_id = ?1
           AND (start_in_milliseconds >= ?2 OR stop_in_milliseconds = 0)
         ORDER BY start_in_milliseconds ASC, id ASC"
    ))?;

    let rows = stmt.query_map(params![project.id, since.value()], map_row)?;
    collect(rows)
}

/// Intervals of a project starting within `[from, to)`.
pub fn find_between(
    conn: &Connection,
    project: &Project,
    from: Milliseconds,
    to: Milliseconds,
) -> AppResult<Vec<TimeInterval>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {COLUMNS} FROM time_intervals
         WHERE project_id = ?1
           AND start_in_milliseconds >= ?2
           AND start_in_milliseconds < ?3
         ORDER BY start_in_milliseconds ASC, id ASC"
    ))?;

    let rows = stmt.query_map(params![project.id, from.value(), to.value()], map_row)?;
    collect(rows)
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<TimeInterval>> {
    let mut stmt =
        conn.prepare_cached(&format!("SELECT {COLUMNS} FROM time_intervals WHERE id = ?1"))?;
    Ok(stmt.query_row(params![id], map_row).optional()?)
}

/// Load every id, failing on the first unknown one.
pub fn find_by_ids(conn: &Connection, ids: &[i64]) -> AppResult<Vec<TimeInterval>> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        let interval = find_by_id(conn, *id)?.ok_or(AppError::TimeIntervalNotFound(*id))?;
        out.push(interval);
    }
    Ok(out)
}

pub fn find_active(conn: &Connection, project: &Project) -> AppResult<Option<TimeInterval>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {COLUMNS} FROM time_intervals
         WHERE project_id = ?1 AND stop_in_milliseconds = 0
         ORDER BY start_in_milliseconds DESC
         LIMIT 1"
    ))?;

    Ok(stmt.query_row(params![project.id], map_row).optional()?)
}

/// Every active interval with its project, ordered by project name.
pub fn find_all_active(conn: &Connection) -> AppResult<Vec<(Project, TimeInterval)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT t.id, t.project_id, t.start_in_milliseconds, t.stop_in_milliseconds,
                t.registered, p.name
         FROM time_intervals t
         JOIN projects p ON p.id = t.project_id
         WHERE t.stop_in_milliseconds = 0
         ORDER BY p.name COLLATE NOCASE ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let interval = map_row(row)?;
        let name: String = row.get(5)?;
        Ok((Project::new(interval.project_id(), name), interval))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert(conn: &Connection, new: NewTimeInterval) -> AppResult<TimeInterval> {
    conn.execute(
        "INSERT INTO time_intervals (project_id, start_in_milliseconds, stop_in_milliseconds, registered)
         VALUES (?1, ?2, 0, 0)",
        params![new.project_id, new.start.value()],
    )?;

    let id = conn.last_insert_rowid();
    find_by_id(conn, id)?.ok_or(AppError::TimeIntervalNotFound(id))
}

pub fn update(conn: &Connection, interval: &TimeInterval) -> AppResult<()> {
    let stop = interval.stop().map(Milliseconds::value).unwrap_or(0);
    let changed = conn.execute(
        "UPDATE time_intervals
         SET start_in_milliseconds = ?2, stop_in_milliseconds = ?3, registered = ?4
         WHERE id = ?1",
        params![
            interval.id(),
            interval.start().value(),
            stop,
            interval.is_registered()
        ],
    )?;

    if changed == 0 {
        return Err(AppError::TimeIntervalNotFound(interval.id()));
    }
    Ok(())
}

pub fn delete(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM time_intervals WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(AppError::TimeIntervalNotFound(id));
    }
    Ok(())
}
