use clap::{Parser, Subcommand};

const VERSION: &str = env!("PMTRACK_VERSION");

#[derive(Parser)]
#[command(
    name = "pmtrack",
    version = VERSION,
    about = "Preventive-maintenance task tracker for moulds and machines",
    after_help = "\
NOTE:
  Data lives in <dir>/.pmtrack/pmtrack.db, found by walking up from the
  current directory. Set PMTRACK_DIR to point at a data directory directly.
  Run `pmtrack init` before any other command.

EXIT CODES:
  0  Success
  1  Error (validation, unknown reference, storage, etc.)

BEHAVIOR NOTES:
  Until a task list is saved, the bundled seed list is served.
  Status changes are unrestricted: any status may follow any other.
  Concurrent writers: the last full write wins.
  Logging goes to stderr; set RUST_LOG (e.g. RUST_LOG=debug) for detail."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize pmtrack in the current directory
    Init,

    /// PM task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Task counts per status
    Summary,

    /// List bundled catalogs
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Print the task list each time another process changes it
    Watch {
        /// Exit after this many changes
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Drop the stored task list (the seed list is served again)
    Reset,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks, optionally filtered by status or due date (not both)
    List {
        /// Scheduled, "In Progress" (or in-progress), Overdue, Completed
        #[arg(long, conflicts_with = "due")]
        status: Option<String>,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
    },
    /// Show one task with its checklist
    Show {
        /// Ticket ID
        ticket_id: String,
    },
    /// Schedule a new PM task, due 7 days from today
    Schedule {
        /// Mould ID number from `catalog moulds`
        #[arg(long, default_value = "")]
        mould: String,
        /// Checksheet ID from `catalog checksheets`
        #[arg(long, default_value = "")]
        checksheet: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        assignee: String,
        #[arg(long, default_value = "")]
        activity: String,
    },
    /// Set the status of a task
    Status {
        /// Ticket ID
        ticket_id: String,
        /// New status
        status: String,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List moulds
    Moulds,
    /// List checksheet templates
    Checksheets,
}
