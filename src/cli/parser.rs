use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to turn biometric ALOG exports into attendance tables
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a biometric ALOG export into a per-employee, per-day IN/OUT/Hours table",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Build the attendance table from an ALOG file, print it and export it
    Process {
        /// ALOG export (.txt / .tsv, UTF-16 or UTF-8, tab-delimited)
        input: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default from config: attendance_table.csv)"
        )]
        out: Option<String>,

        #[arg(long, value_enum, help = "Export format (default from config: csv)")]
        format: Option<ExportFormat>,

        #[arg(long = "no-export", help = "Only print the table, write no file")]
        no_export: bool,

        #[arg(long, short = 'e', help = "Also print the parsed, filtered, de-bursted rows")]
        events: bool,

        #[arg(long = "day-first", help = "Read ambiguous dates as DD/MM/YYYY")]
        day_first: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },

    /// List the parsed, filtered, de-bursted punch events of an ALOG file
    Events {
        /// ALOG export (.txt / .tsv, UTF-16 or UTF-8, tab-delimited)
        input: String,

        #[arg(long, value_name = "FILE", help = "Export the listing instead of printing it")]
        out: Option<String>,

        #[arg(long, value_enum, default_value = "csv", help = "Listing export format")]
        format: ExportFormat,

        #[arg(long = "day-first", help = "Read ambiguous dates as DD/MM/YYYY")]
        day_first: bool,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },
}
