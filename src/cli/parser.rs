use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkhours
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record working-hours sessions and keep a running overtime balance",
    long_about = None
)]
pub struct Cli {
    /// Override the session log path (useful for tests or a second log)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Print debug diagnostics
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty session log
    Init,

    /// Start a session now
    Login,

    /// Close the running session now and update the totals
    Logout,

    /// Attach a project to the running session
    Project {
        /// Project name or its number in `projects`
        selector: String,
    },

    /// Show the current login state
    Status,

    /// List the configured projects
    Projects,

    /// List recorded days with their totals
    List {
        #[arg(long, short, help = "Show only the most recent N days")]
        days: Option<usize>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Create a backup copy of the session log
    Backup {
        #[arg(long, value_name = "FILE", help = "Destination of the copy")]
        dest: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup")]
        force: bool,
    },
}
