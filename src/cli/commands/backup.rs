use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info};
use crate::utils::path::require_absolute;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = require_absolute(file)?;
        let target = if *compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if target.exists()
            && !*force
            && !ask_confirmation(&format!(
                "The file '{}' already exists. Overwrite?",
                target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        BackupLogic::backup(cfg, dest, *compress)?;
    }

    Ok(())
}
