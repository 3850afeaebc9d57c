use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::core::register::{RegisterLogic, Selection, parse_ids};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, success, warning};
use crate::utils::date;

fn selection(ids: &Option<String>, day: &Option<String>) -> AppResult<Selection> {
    match (ids, day) {
        (Some(raw), _) => Ok(Selection::Ids(parse_ids(raw)?)),
        (None, Some(d)) => date::parse_date(d)
            .map(Selection::Date)
            .ok_or_else(|| AppError::InvalidDate(d.clone())),
        (None, None) => Err(AppError::InvalidId("use --ids or --date".into())),
    }
}

/// Handle `register` and `remove-time`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Register { project, ids, date } => {
            let mut pool = open(cfg)?;
            let project = ProjectLogic::require(&pool, project)?;
            let intervals = RegisterLogic::select(&pool, &project, &selection(ids, date)?)?;

            if intervals.is_empty() {
                warning("No time intervals selected.");
                return Ok(());
            }

            let updated = RegisterLogic::mark_registered_time(&mut pool, intervals)?;
            let registered = updated.iter().all(|t| t.is_registered());
            success(format!(
                "{} {} time interval(s) of '{}'.",
                if registered { "Registered" } else { "Unregistered" },
                updated.len(),
                project.name
            ));
        }

        Commands::RemoveTime {
            project,
            ids,
            date,
            yes,
        } => {
            let mut pool = open(cfg)?;
            let project = ProjectLogic::require(&pool, project)?;
            let intervals = RegisterLogic::select(&pool, &project, &selection(ids, date)?)?;

            if intervals.is_empty() {
                warning("No time intervals selected.");
                return Ok(());
            }

            let prompt = format!(
                "Remove {} time interval(s) of '{}'? This action is irreversible.",
                intervals.len(),
                project.name
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = RegisterLogic::remove_time(&mut pool, &intervals)?;
            success(format!("Removed {removed} time interval(s)."));
        }

        _ => {}
    }

    Ok(())
}
