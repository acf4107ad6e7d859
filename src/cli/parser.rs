use clap::{Parser, Subcommand};

/// Command-line interface definition for rOvertime
/// CLI application to compute overtime pay from clock-in data
#[derive(Parser)]
#[command(
    name = "rovertime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute overtime pay, meal allowances and lateness from monthly clock-in data",
    long_about = None
)]
pub struct Cli {
    /// Use a custom configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and data directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute the monthly overtime report
    Calc {
        /// Month to compute (YYYY-MM). Defaults to the current month.
        month: Option<String>,

        #[arg(long = "data", value_name = "DIR", help = "Directory holding the data files")]
        data: Option<String>,

        #[arg(long = "rate", help = "Hourly overtime rate (overrides the configuration)")]
        rate: Option<f64>,

        #[arg(
            long = "personal-leave-hours",
            value_name = "HOURS",
            help = "Personal leave hours to net (overrides the leave records)"
        )]
        personal_leave_hours: Option<f64>,

        #[arg(long = "details", help = "Also print one row per day")]
        details: bool,

        #[arg(long = "json", help = "Print the summary and daily results as JSON")]
        json: bool,
    },

    /// Show how a date is classified
    Classify {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "data", value_name = "DIR", help = "Directory holding the data files")]
        data: Option<String>,
    },

    /// List the leave intervals extracted for a month
    Leave {
        /// Month (YYYY-MM). Defaults to the current month.
        month: Option<String>,

        #[arg(long = "data", value_name = "DIR", help = "Directory holding the data files")]
        data: Option<String>,
    },
}
