//! SQLite connection pool wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Self::configure(conn)
    }

    /// Private database living only as long as the pool, used by tests.
    pub fn in_memory() -> Result<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    fn configure(conn: Connection) -> Result<Self> {
        // ON DELETE CASCADE on time_intervals depends on this.
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self { conn })
    }
}
