use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for itlogbook
/// IT department logbook: daily database backups and work entries in SQLite
#[derive(Parser)]
#[command(
    name = "itlogbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "IT department logbook: record database backups and IT work entries in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print results as JSON `{ success, data, error }` outcomes
    #[arg(global = true, long = "json")]
    pub json: bool,

    /// Enable debug diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Landing page: the built-in sample logbook, filtered in memory
    Home {
        #[command(flatten)]
        filter: LogbookFilterArgs,

        #[command(flatten)]
        rows: RowArgs,

        /// Remove row N from the sample list before printing (not persisted)
        #[arg(long = "delete", value_name = "N")]
        delete: Option<usize>,
    },

    /// Daily database backup log
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },

    /// IT work logbook
    Logbook {
        #[command(subcommand)]
        action: LogbookAction,
    },
}

#[derive(Subcommand)]
pub enum BackupAction {
    /// Record a backup
    Add {
        /// Backup date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        tanggal: Option<String>,

        /// Shift: pagi, siang or sore
        #[arg(long)]
        shift: Option<String>,

        /// Person in charge
        #[arg(long, default_value = "")]
        pic: String,

        /// Time of day, defaults to now (HH:MM:SS)
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// List backup logs, newest first
    List {
        #[command(flatten)]
        filter: BackupFilterArgs,

        #[command(flatten)]
        rows: RowArgs,
    },

    /// Show one backup log
    Show { id: String },

    /// Export backup logs
    Export {
        #[command(flatten)]
        filter: BackupFilterArgs,

        #[command(flatten)]
        output: ExportArgs,
    },
}

#[derive(Subcommand)]
pub enum LogbookAction {
    /// Add a logbook entry
    Add {
        /// Jenis pekerjaan (type of work)
        #[arg(long = "work", default_value = "")]
        jenis_pekerjaan: String,

        /// it, hr, finance, marketing or operations
        #[arg(long)]
        department: Option<String>,

        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long = "start")]
        tanggal_mulai: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long = "end")]
        tanggal_selesai: Option<String>,

        /// Person in charge
        #[arg(long, default_value = "")]
        pic: String,

        /// pending, in-progress or completed
        #[arg(long)]
        status: Option<String>,

        /// Keterangan (notes)
        #[arg(long = "notes")]
        keterangan: Option<String>,

        /// Purchase request number
        #[arg(long = "pr")]
        nomor_pr: Option<String>,
    },

    /// List logbook entries, newest first
    List {
        #[command(flatten)]
        filter: LogbookFilterArgs,

        #[command(flatten)]
        rows: RowArgs,
    },

    /// Show one entry in full
    Show { id: String },

    /// Change fields of an entry; pass an empty value to clear an optional field
    Edit {
        id: String,

        #[arg(long = "work")]
        jenis_pekerjaan: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long = "start")]
        tanggal_mulai: Option<String>,

        #[arg(long = "end")]
        tanggal_selesai: Option<String>,

        #[arg(long)]
        pic: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long = "notes")]
        keterangan: Option<String>,

        #[arg(long = "pr")]
        nomor_pr: Option<String>,
    },

    /// Delete an entry
    Delete { id: String },

    /// Export logbook entries
    Export {
        #[command(flatten)]
        filter: LogbookFilterArgs,

        #[command(flatten)]
        output: ExportArgs,
    },
}

/// Filters shared by the logbook views.
#[derive(Args, Debug, Clone, Default)]
pub struct LogbookFilterArgs {
    /// Case-insensitive text search over work, department, PIC, notes and PR
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Status filter (`all` for no filter)
    #[arg(long = "status", default_value = "all-statuses")]
    pub status: String,

    /// Department filter (`all` for no filter)
    #[arg(long = "department", default_value = "all-departments")]
    pub department: String,

    /// Earliest start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest start date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Filters of the backup-log view.
#[derive(Args, Debug, Clone, Default)]
pub struct BackupFilterArgs {
    /// Shift filter (`all` for no filter)
    #[arg(long = "shift", default_value = "all")]
    pub shift: String,

    /// Case-insensitive PIC search
    #[arg(long = "pic", default_value = "")]
    pub pic: String,

    #[arg(long)]
    pub from: Option<String>,

    #[arg(long)]
    pub to: Option<String>,
}

/// Table sorting and row actions.
#[derive(Args, Debug, Clone, Default)]
pub struct RowArgs {
    /// Click a column header; repeat the same column to flip the direction
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Show row N of the sorted table in full
    #[arg(long = "view", value_name = "N")]
    pub view: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "xlsx")]
    pub format: ExportFormat,

    /// Output file (defaults to the export directory from the config)
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,

    /// Overwrite an existing file without asking
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Row order of the export, as with `list --sort`
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,
}
