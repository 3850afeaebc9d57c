pub mod backup;
pub mod clock;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod project;
pub mod register;
pub mod report;
pub mod restore;
pub mod status;

use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::initialize::open_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::hours_minutes::HoursMinutesFormat;
use crate::models::milliseconds::Milliseconds;
use crate::models::project::Project;
use crate::ui::messages::ongoing;
use crate::utils::date;
use crate::utils::formatting::format_hours_minutes;
use crate::utils::time::{format_clock, parse_optional_when};

/// Open the configured database with the schema up to date.
pub(crate) fn open(cfg: &Config) -> AppResult<DbPool> {
    open_db(&cfg.database)
}

/// `--at` value, or now when absent.
pub(crate) fn resolve_at(at: &Option<String>) -> AppResult<Milliseconds> {
    Ok(parse_optional_when(at.as_ref(), date::today())?
        .map(|dt| Milliseconds::from_local(&dt))
        .unwrap_or_else(Milliseconds::now))
}

/// Print the ongoing line for `project` when enabled in the configuration.
pub(crate) fn print_ongoing(pool: &DbPool, cfg: &Config, project: &Project) -> AppResult<()> {
    if !cfg.show_ongoing_status {
        return Ok(());
    }

    let now = Milliseconds::now();
    let today = ClockLogic::time_today(pool, project, now)?;
    let today = format_hours_minutes(today, cfg.time_report_summary_format);

    match ClockLogic::active(pool, project)? {
        Some(active) => ongoing(format!(
            "{}: clocked in since {}, today {}",
            project.name,
            format_clock(&active.start().to_local()),
            today
        )),
        None => ongoing(format!("{}: today {}", project.name, today)),
    }
    Ok(())
}

pub(crate) fn summary_format(cfg: &Config, requested: Option<HoursMinutesFormat>) -> HoursMinutesFormat {
    requested.unwrap_or(cfg.time_report_summary_format)
}
