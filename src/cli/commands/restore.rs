use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, yes } = cmd {
        let prompt = format!(
            "Replace {} with the backup {}? Current data will be lost.",
            cfg.database, file
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Restore cancelled.");
            return Ok(());
        }

        BackupLogic::restore(cfg, Path::new(file))?;
    }

    Ok(())
}
