//! rworker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::In { .. } | Commands::Out { .. } | Commands::Toggle { .. } => {
            cli::commands::clock::handle(&cli.command, cfg)
        }
        Commands::Status => cli::commands::status::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Register { .. } | Commands::RemoveTime { .. } => {
            cli::commands::register::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Restore { .. } => cli::commands::restore::handle(&cli.command, cfg),
    }
}

/// Entry point called by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` writes the config itself, everything else loads it once.
    let mut cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load()?,
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    tracing::debug!(database = %cfg.database, "configuration loaded");

    dispatch(&cli, &cfg)
}
