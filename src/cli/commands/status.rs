use crate::cli::commands::{open, summary_format};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::AppResult;
use crate::models::milliseconds::Milliseconds;
use crate::ui::messages::{info, ongoing};
use crate::utils::formatting::format_hours_minutes;
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Status) {
        let pool = open(cfg)?;
        let statuses = StatusLogic::ongoing(&pool, Milliseconds::now())?;

        if statuses.is_empty() {
            info("Not clocked in to any project.");
            return Ok(());
        }

        let format = summary_format(cfg, None);
        for s in statuses {
            ongoing(format!(
                "{}: clocked in since {}, today {}",
                s.project.name,
                format_clock(&s.since.to_local()),
                format_hours_minutes(s.today, format)
            ));
        }
    }

    Ok(())
}
