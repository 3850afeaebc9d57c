use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// A schema change, applied once and recorded in the `log` table as
/// `migration_applied` with the version as target.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240101_0001_create_projects",
        description: "Created projects table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS projects (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE COLLATE NOCASE
        );
        "#,
    },
    Migration {
        version: "20240101_0002_create_time_intervals",
        description: "Created time_intervals table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS time_intervals (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id            INTEGER NOT NULL
                                  REFERENCES projects(id) ON DELETE CASCADE,
            start_in_milliseconds INTEGER NOT NULL,
            stop_in_milliseconds  INTEGER NOT NULL DEFAULT 0,
            registered            INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_time_intervals_project_start
            ON time_intervals(project_id, start_in_milliseconds);
        "#,
    },
    Migration {
        version: "20240301_0003_index_active_time_intervals",
        description: "Added index for active time interval lookups",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_time_intervals_project_stop
            ON time_intervals(project_id, stop_in_milliseconds);
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

pub fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

pub fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Versions not yet applied to this database.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m.version);
        }
    }
    Ok(pending)
}

/// Public entry point: run all pending migrations, each in its own
/// transaction. Returns how many were applied. Called by `db::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
        mark_applied(&tx, m.version, m.description)?;
        tx.commit()?;

        tracing::info!(version = m.version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}
