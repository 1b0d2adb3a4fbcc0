use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to submit and review contractor timesheets
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: contractors submit hours, administrators approve or reject them",
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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing or unknown keys")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys (with defaults) to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", requires = "edit_config")]
        editor: Option<String>,
    },

    /// Storage maintenance
    Db {
        #[arg(long = "migrate", help = "Apply pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Run an integrity check on the database and the stored list")]
        check: bool,

        #[arg(long = "vacuum", help = "Compact the database file")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Log in with a configured account
    Login {
        /// Username (see `users` in the configuration file)
        username: String,
    },

    /// Close the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List the projects a contractor can submit hours for
    Projects,

    /// Submit a timesheet entry (contractor)
    Submit {
        /// Work date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Project name (see `rtimesheet projects`)
        #[arg(long)]
        project: String,

        /// Hours worked (0.5 steps, at most 24)
        #[arg(long, allow_negative_numbers = true)]
        hours: f64,

        /// Optional free-text comment
        #[arg(long)]
        comment: Option<String>,
    },

    /// List your own timesheets (contractor)
    Mine {
        /// Filter by status: pending, approved, rejected
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one timesheet in detail
    Show {
        /// Timesheet id
        id: u64,
    },

    /// List all timesheets with filters (admin)
    List {
        /// Case-insensitive search in contractor, project and comments
        #[arg(long, short)]
        search: Option<String>,

        /// Filter by status: pending, approved, rejected (or all)
        #[arg(long)]
        status: Option<String>,

        /// Filter by exact contractor name (or all)
        #[arg(long)]
        contractor: Option<String>,

        /// Filter by work date.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM       → month range (e.g. "2025-06:2025-08")
        /// - YYYY-MM-DD:YYYY-MM-DD → day range   (e.g. "2025-06-01:2025-06-10")
        #[arg(long, short)]
        period: Option<String>,
    },

    /// List the contractors that have submitted timesheets (admin)
    Contractors,

    /// Show the status summary (admin)
    Stats,

    /// Approve a pending timesheet (admin)
    Approve {
        /// Timesheet id
        id: u64,
    },

    /// Reject a pending timesheet (admin)
    Reject {
        /// Timesheet id
        id: u64,
    },

    /// Stamp a timesheet as reviewed without changing its status (admin)
    Review {
        /// Timesheet id
        id: u64,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        /// Only show one operation (e.g. submit, approve, login)
        #[arg(long = "op", requires = "print")]
        operation: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export timesheets (admin)
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Work date range to export (same formats as `list --period`, or "all")
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Only export one status
        #[arg(long)]
        status: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
