use clap::{Parser, Subcommand};

/// Command-line interface definition for rTasklog
#[derive(Parser)]
#[command(
    name = "rtasklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A daily task logger: hours per category and task, served as a JSON API over SQLite",
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

    /// Run the HTTP API server
    Serve {
        #[arg(long, help = "Address to bind (default from config: 127.0.0.1)")]
        host: Option<String>,

        #[arg(long, help = "Port to listen on (default from config: 5000)")]
        port: Option<u16>,
    },

    /// Replace all entries of a day
    Save {
        /// Date of the entries (YYYY-MM-DD)
        date: String,

        /// One entry as "CATEGORY;TASK;HOURS" (repeatable)
        #[arg(long = "row", required = true, value_name = "CATEGORY;TASK;HOURS")]
        rows: Vec<String>,
    },

    /// Show the entries and category totals of a day
    Show {
        /// Date to show (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Database maintenance
    Db {
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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the copy into a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup file")]
        force: bool,
    },
}
