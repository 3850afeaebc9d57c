use crate::config::Config;
use crate::config::migrate::{missing_keys, run_config_migration};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        missing_keys(path)
    }

    pub fn migrate(conn: &Connection, path: &Path) -> AppResult<Vec<&'static str>> {
        run_config_migration(conn, path)
    }

    /// Open the file in `editor`, `$EDITOR`, `$VISUAL` or the platform
    /// default, in that order.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("unable to start '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }
        Ok(ed)
    }
}
