use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ImportArgs, ServeArgs};

/// Student planned for when no login exists.
pub const DEFAULT_STUDENT_ID: &str = "102899";

/// Main command-line interface for the Trailhead course planner
///
/// Trailhead tracks completed courses, lists the courses still to take, and
/// recommends next courses from the successor links stored with the catalog.
/// It runs as a small web application (`serve`) or prints the same pages to
/// the terminal.
#[derive(Parser)]
#[command(version, about, name = "trailhead")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/trailhead/trailhead.db
    #[arg(long, global = true, env = "TRAILHEAD_DATABASE")]
    pub database_file: Option<PathBuf>,

    /// Student whose records are shown
    #[arg(long, global = true, env = "TRAILHEAD_STUDENT_ID", default_value = DEFAULT_STUDENT_ID)]
    pub student_id: String,

    /// Seconds a single storage call may take before the request fails
    #[arg(
        long,
        global = true,
        env = "TRAILHEAD_STORAGE_TIMEOUT",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub storage_timeout_secs: u64,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trailhead CLI
///
/// Without a command the plan-ahead page is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),
    /// Replace the catalog and student records with a seed document
    Import(ImportArgs),
    /// List the course catalog
    #[command(alias = "c")]
    Courses,
    /// Show credits completed and courses left
    #[command(alias = "p")]
    Progress,
    /// Show active courses and recommended next courses
    Planner,
}
