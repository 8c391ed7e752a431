//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meeting attendance reports.
///
/// Turns a videoconference attendance export into a per-group attendance
/// report, listing roster members who never joined as absent.
#[derive(Debug, Parser)]
#[command(name = "ta", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build an attendance report from an export.
    Report {
        /// Export file to process (default: newest export in the export directory).
        #[arg(long)]
        export: Option<PathBuf>,

        /// Directory to write the report to.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Roster file to reconcile against.
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Print the report as JSON instead of writing a file.
        #[arg(long)]
        json: bool,

        /// Classify and log, but write nothing.
        #[arg(long, conflicts_with = "json")]
        dry_run: bool,
    },

    /// Show the time slot and lateness for a clock time.
    Slot {
        /// Time as HH:MM:SS or MM:SS.
        time: String,
    },

    /// Show the newest export in the export directory.
    Latest,
}
