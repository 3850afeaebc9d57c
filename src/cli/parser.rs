use crate::export::ExportFormat;
use crate::models::hours_minutes::HoursMinutesFormat;
use clap::{Parser, Subcommand};

/// Upper bound for `--page` and `--page-size`.
pub const MAX_PAGING: i64 = 10_000;

/// Command-line interface definition for rworker
/// CLI application to clock in and out of projects with SQLite
#[derive(Parser)]
#[command(
    name = "rworker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out of projects and review weekly time reports using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create, list or remove projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Clock in to a project
    In {
        project: String,

        #[arg(long, value_name = "WHEN", help = "HH:MM today or 'YYYY-MM-DD HH:MM'")]
        at: Option<String>,
    },

    /// Clock out of a project
    Out {
        project: String,

        #[arg(long, value_name = "WHEN", help = "HH:MM today or 'YYYY-MM-DD HH:MM'")]
        at: Option<String>,
    },

    /// Clock in when inactive, otherwise clock out
    Toggle {
        project: String,

        #[arg(long, value_name = "WHEN", help = "HH:MM today or 'YYYY-MM-DD HH:MM'")]
        at: Option<String>,

        #[arg(long, short = 'y', help = "Clock out without asking for confirmation")]
        yes: bool,
    },

    /// Show clocked in projects and their time today
    Status,

    /// Weekly time report of a project
    Report {
        project: String,

        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(i64).range(1..=MAX_PAGING),
            help = "Page of weeks to show, newest first"
        )]
        page: i64,

        #[arg(
            long = "page-size",
            default_value_t = 4,
            value_parser = clap::value_parser!(i64).range(1..=MAX_PAGING),
            help = "Weeks per page"
        )]
        page_size: i64,

        #[arg(long = "hide-registered", conflicts_with = "show_registered")]
        hide_registered: bool,

        #[arg(long = "show-registered")]
        show_registered: bool,

        #[arg(long, value_enum, help = "Summary format (default from configuration)")]
        format: Option<HoursMinutesFormat>,
    },

    /// Toggle the registered state of time intervals
    Register {
        project: String,

        #[arg(long, value_name = "IDS", conflicts_with = "date", required_unless_present = "date")]
        ids: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// Remove time intervals
    RemoveTime {
        project: String,

        #[arg(long, value_name = "IDS", conflicts_with = "date", required_unless_present = "date")]
        ids: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the time intervals of a project
    Export {
        project: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },

    /// Replace the database with a backup copy
    Restore {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project
    Add { name: String },

    /// List projects with their time since the configured starting point
    List {
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::value_parser!(i64).range(1..=MAX_PAGING)
        )]
        page: i64,

        #[arg(
            long = "page-size",
            default_value_t = 20,
            value_parser = clap::value_parser!(i64).range(1..=MAX_PAGING)
        )]
        page_size: i64,
    },

    /// Remove a project and all of its time
    Remove {
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
