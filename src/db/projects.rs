//! Queries on the `projects` table.

use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params};

fn map_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn insert_project(conn: &Connection, name: &str) -> AppResult<Project> {
    match conn.execute("INSERT INTO projects (name) VALUES (?1)", params![name]) {
        Ok(_) => Ok(Project::new(conn.last_insert_rowid(), name)),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(AppError::ProjectAlreadyExists(name.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Case-insensitive lookup by name.
pub fn find_project_by_name(conn: &Connection, name: &str) -> AppResult<Option<Project>> {
    let mut stmt = conn.prepare_cached("SELECT id, name FROM projects WHERE name = ?1")?;
    Ok(stmt.query_row(params![name.trim()], map_row).optional()?)
}

pub fn find_project_by_id(conn: &Connection, id: i64) -> AppResult<Option<Project>> {
    let mut stmt = conn.prepare_cached("SELECT id, name FROM projects WHERE id = ?1")?;
    Ok(stmt.query_row(params![id], map_row).optional()?)
}

pub fn count_projects(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?)
}

/// Page of projects ordered by name, skipping `position` rows.
pub fn find_projects(conn: &Connection, position: i64, size: i64) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name FROM projects
         ORDER BY name COLLATE NOCASE ASC
         LIMIT ?1 OFFSET ?2",
    )?;

    let rows = stmt.query_map(params![size, position], map_row)?;

    let mut projects = Vec::new();
    for r in rows {
        projects.push(r?);
    }
    Ok(projects)
}

pub fn delete_project(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?)
}
