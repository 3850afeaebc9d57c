use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        project,
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = open(cfg)?;
        let project = ProjectLogic::require(&pool, project)?;
        ExportLogic::export(&pool, &project, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
