use crate::cli::commands::{open, summary_format};
use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::core::time_report::LoadRange;
use crate::errors::AppResult;
use crate::models::milliseconds::Milliseconds;
use crate::ui::messages::{ask_confirmation, header, info, success};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::formatting::{format_hours_minutes, pad_left, pad_right};
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };

    let mut pool = open(cfg)?;

    match action {
        ProjectAction::Add { name } => {
            let project = ProjectLogic::create(&mut pool, name)?;
            success(format!("Project '{}' created (id {}).", project.name, project.id));
        }

        ProjectAction::List { page, page_size } => {
            let total = ProjectLogic::count(&pool)?;
            if total == 0 {
                info("No projects yet. Create one with `rworker project add <NAME>`.");
                return Ok(());
            }

            let size = (*page_size).max(1);
            let range = LoadRange::page(page.saturating_sub(1), size);
            let projects = ProjectLogic::find_page(&pool, range.position, range.size)?;

            let starting_point = cfg.starting_point();
            let format = summary_format(cfg, None);
            let now = Milliseconds::now();

            header(format!("Projects ({total}), time since start of {starting_point}"));

            let name_w = projects.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);
            for project in projects {
                let summary = ProjectLogic::summarize(&pool, project, starting_point, now);
                let time = pad_left(&format_hours_minutes(summary.time_summary, format), 8);

                match summary.active {
                    Some(active) => println!(
                        "  {} {}  {GREEN}● since {}{RESET}",
                        pad_right(&summary.project.name, name_w),
                        time,
                        format_clock(&active.start().to_local())
                    ),
                    None => println!("  {} {}", pad_right(&summary.project.name, name_w), time),
                }
            }

            let pages = LoadRange::page_count(total, size);
            if pages > 1 {
                println!("{GREY}page {}/{}{RESET}", (*page).max(1), pages);
            }
        }

        ProjectAction::Remove { name, yes } => {
            let project = ProjectLogic::require(&pool, name)?;

            let prompt = format!(
                "Remove project '{}' and all of its time? This action is irreversible.",
                project.name
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            ProjectLogic::remove(&mut pool, &project)?;
            success(format!("Project '{}' has been removed.", project.name));
        }
    }

    Ok(())
}
