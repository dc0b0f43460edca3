use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// triage — log triage and host snapshot reporting
///
/// Keeps the warnings and errors of a log corpus, captures the state of the
/// host, and writes both as one two-section report.
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and export the two-section report
    #[command(alias = "r")]
    Report {
        /// Log corpus to read (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Shape of the log corpus: lines or json
        #[arg(short, long)]
        source: Option<String>,

        /// Report artifact path (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Artifact format: csv, json or xlsx
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Filter a structured JSON log file into a sorted JSON array
    #[command(alias = "f")]
    Filter {
        /// Structured log file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Destination of the filtered records
        #[arg(short, long, default_value = "filtered_logs.json")]
        output: PathBuf,
    },

    /// Show current system status
    #[command(alias = "s")]
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the population of a commune or department
    #[command(alias = "p")]
    Population {
        /// Commune (5 digits) or department (2-3 digits) code; prompted when absent
        code: Option<String>,
    },
}
