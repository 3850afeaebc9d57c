use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::milliseconds::Milliseconds;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Aggregate numbers shown by `db --info`.
#[derive(Debug, Clone, Default)]
pub struct DbStats {
    pub projects: i64,
    pub time_intervals: i64,
    pub registered: i64,
    pub active: i64,
    pub first_start: Option<Milliseconds>,
    pub last_start: Option<Milliseconds>,
}

pub fn collect_stats(pool: &DbPool) -> AppResult<DbStats> {
    let conn = &pool.conn;

    let projects: i64 = conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))?;

    let (time_intervals, registered, active, first, last): (
        i64,
        i64,
        i64,
        Option<i64>,
        Option<i64>,
    ) = conn.query_row(
        "SELECT COUNT(*),
                IFNULL(SUM(registered), 0),
                IFNULL(SUM(stop_in_milliseconds = 0), 0),
                MIN(start_in_milliseconds),
                MAX(start_in_milliseconds)
         FROM time_intervals",
        [],
        |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        },
    )?;

    Ok(DbStats {
        projects,
        time_intervals,
        registered,
        active,
        first_start: first.map(Milliseconds),
        last_start: last.map(Milliseconds),
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) COUNTERS
    //
    let stats = collect_stats(pool)?;
    println!(
        "{}• Projects:{} {}{}{}",
        CYAN, RESET, GREEN, stats.projects, RESET
    );
    println!(
        "{}• Time intervals:{} {}{}{} ({} registered, {} active)",
        CYAN, RESET, GREEN, stats.time_intervals, RESET, stats.registered, stats.active
    );

    //
    // 3) DATE RANGE
    //
    let fmt = |v: Option<Milliseconds>| {
        v.map(|ms| ms.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(stats.first_start));
    println!("    to:   {}", fmt(stats.last_start));

    println!();
    Ok(())
}
