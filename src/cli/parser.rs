use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for hourstats
/// Clock in/out of a project and report worked hours from SQLite
#[derive(Parser, Debug)]
#[command(
    name = "hourstats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out of a project and report worked hours by year and month",
    long_about = None
)]
pub struct Cli {
    /// Year to report on or to stamp new sessions with (default: current year)
    #[arg(global = true, short = 'y', long = "year", value_parser = clap::value_parser!(i32).range(1..=9999))]
    pub year: Option<i32>,

    /// Month to report on (1-12, 0 = every month; default: current month)
    #[arg(global = true, short = 'm', long = "month", value_parser = clap::value_parser!(u32).range(0..=12))]
    pub month: Option<u32>,

    /// Configuration file (default: stats.yaml in the working directory)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override database path for this run only (never written back)
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Without a subcommand, summed hours are shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start a work session for the configured project
    Up,

    /// Stop the running work session
    Down,

    /// List sessions (one row per session) for -y/-m
    Ls,

    /// Export the session list for -y/-m to <project>.csv
    Out,
}
