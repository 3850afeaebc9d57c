use crate::cli::commands::{open, print_ongoing, resolve_at};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{ClockLogic, ToggleOutcome};
use crate::core::project::ProjectLogic;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::time::format_clock;

/// Handle `in`, `out` and `toggle`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::In { project, at } => {
            let mut pool = open(cfg)?;
            let project = ProjectLogic::require(&pool, project)?;
            let at = resolve_at(at)?;

            let interval = ClockLogic::clock_in(&mut pool, &project, at)?;
            success(format!(
                "Clocked in to '{}' at {}",
                project.name,
                format_clock(&interval.start().to_local())
            ));
            print_ongoing(&pool, cfg, &project)?;
        }
        Commands::Out { project, at } => {
            let mut pool = open(cfg)?;
            let project = ProjectLogic::require(&pool, project)?;
            let at = resolve_at(at)?;

            ClockLogic::clock_out(&mut pool, &project, at, cfg.max_interval_hours)?;
            success(format!(
                "Clocked out of '{}' at {}",
                project.name,
                format_clock(&at.to_local())
            ));
            print_ongoing(&pool, cfg, &project)?;
        }
        Commands::Toggle { project, at, yes } => {
            let mut pool = open(cfg)?;
            let project = ProjectLogic::require(&pool, project)?;
            let at = resolve_at(at)?;

            let outcome = ClockLogic::toggle(&mut pool, cfg, &project, at, |active| {
                *yes || ask_confirmation(&format!(
                    "Clock out of '{}' (clocked in since {})?",
                    project.name,
                    format_clock(&active.start().to_local())
                ))
            })?;

            match outcome {
                ToggleOutcome::ClockedIn(_) => {
                    success(format!("Clocked in to '{}'", project.name))
                }
                ToggleOutcome::ClockedOut(_) => {
                    success(format!("Clocked out of '{}'", project.name))
                }
                ToggleOutcome::Cancelled => {
                    info("Operation cancelled.");
                    return Ok(());
                }
            }
            print_ongoing(&pool, cfg, &project)?;
        }
        _ => {}
    }

    Ok(())
}
