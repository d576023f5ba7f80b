//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Badge statistics command arguments.
#[derive(Debug, Args)]
pub struct BadgesCommand {
    /// Path to the flights JSONL file (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the summary as JSON instead of text
    #[arg(short, long)]
    pub json: bool,
}

/// Task criterion comparison command arguments.
#[derive(Debug, Args)]
pub struct TasksCommand {
    /// Path to the flights JSONL file (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the comparison as JSON instead of text
    #[arg(short, long)]
    pub json: bool,
}

/// Scoring verification command arguments.
#[derive(Debug, Args)]
pub struct ScoringCommand {
    /// Path to the flights JSONL file (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Points tolerance before a mismatch is flagged (overrides config)
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Maximum mismatches printed per category (overrides config)
    #[arg(short, long)]
    pub sample: Option<usize>,
}

/// Pilot report command arguments.
#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Path to the flights JSONL file (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Also write pilot_report.json to the output directory
    #[arg(short, long)]
    pub write_json: bool,
}

/// Verification merge command arguments.
#[derive(Debug, Args)]
pub struct VerifyCommand {
    /// Path of the manually created temp file (overrides config)
    #[arg(short, long)]
    pub temp: Option<PathBuf>,

    /// Path of the persisted leaderboard file (overrides config)
    #[arg(short, long)]
    pub leaderboard: Option<PathBuf>,
}

/// HTML embedding command arguments.
#[derive(Debug, Args)]
pub struct EmbedCommand {
    /// The static HTML page to rewrite
    pub html: PathBuf,

    /// JSON file to inline (defaults to the leaderboard)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output path (defaults to `<html stem>_standalone.html`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The fetch expression to replace
    #[arg(short, long)]
    pub marker: Option<String>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
