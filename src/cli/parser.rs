use crate::core::import::ImportFormat;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for messroll
/// CLI application to record mess check-ins and summarise meal attendance with SQLite
#[derive(Parser)]
#[command(
    name = "messroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record mess check-ins and summarise per-person, per-day meal attendance using SQLite",
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

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
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

    /// Record a single check-in (card swipe)
    Add {
        /// Unique identifier of the person (card id)
        identifier: String,

        #[arg(long = "name", default_value = "", help = "Display name")]
        name: String,

        #[arg(long = "roll", default_value = "", help = "Roll number")]
        roll: String,

        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Swipe instant in UTC (YYYY-MM-DD HH:MM or RFC3339), default now"
        )]
        at: Option<String>,
    },

    /// Bulk-import check-ins from a CSV or JSON file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Input format (default: from file extension)")]
        format: Option<ImportFormat>,
    },

    /// Show the meal attendance summary for a date window
    Summary {
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: String,

        #[arg(long, help = "Keep only roll numbers containing this text (case-insensitive)")]
        filter: Option<String>,
    },

    /// Export the meal attendance summary for a date window
    Export {
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: String,

        #[arg(long, help = "Keep only roll numbers containing this text (case-insensitive)")]
        filter: Option<String>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
