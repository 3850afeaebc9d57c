use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Handle `db`. Flags combine and run in the order migrate, info, check,
/// vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // Opened without migrating so `--info` can still report pending ones.
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        let applied = run_pending_migrations(&pool.conn)?;
        if applied == 0 {
            info("Database schema already up to date.");
        } else {
            success(format!("Migration completed ({applied} applied)."));
        }
    }

    if *show_info {
        let pending = pending_migrations(&pool.conn)?;
        if pending.is_empty() {
            stats::print_db_info(&pool, &cfg.database)?;
        } else {
            warning(format!(
                "Pending migrations: {} (run `rworker db --migrate` first)",
                pending.join(", ")
            ));
        }
    }

    if *check {
        integrity_check(&pool)?;
        success("Integrity check passed.");
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}

fn integrity_check(pool: &DbPool) -> AppResult<()> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if result == "ok" {
        Ok(())
    } else {
        Err(AppError::Migration(format!("integrity check failed: {result}")))
    }
}
