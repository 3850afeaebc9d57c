use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            ConfigLogic::print(cfg)?;
        }

        if *check {
            let missing = ConfigLogic::check(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing configuration keys: {} (run `rworker config --migrate`)",
                    missing.join(", ")
                ));
            }
        }

        if *migrate {
            let pool = open(cfg)?;
            let added = ConfigLogic::migrate(&pool.conn, &path)?;
            if added.is_empty() {
                success("Configuration already up to date.");
            }
        }

        if *edit_config {
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!(
                "Configuration file edited successfully using '{}'",
                used
            ));
        }
    }

    Ok(())
}
