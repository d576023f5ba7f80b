//! Command-line interface for gliderstats.
//!
//! This module provides the CLI structure and command definitions for the
//! `glstats` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    BadgesCommand, ConfigCommand, EmbedCommand, ReportCommand, ScoringCommand, TasksCommand,
    VerifyCommand,
};

/// glstats - Reports over a gliding flight dataset
///
/// Scans a line-delimited JSON dataset of gliding flights and produces
/// badge statistics, task-criterion comparisons, scoring sanity checks,
/// pilot reports, leaderboard maintenance, and self-contained HTML pages.
#[derive(Debug, Parser)]
#[command(name = "glstats")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count badge achievements and junior pilots
    Badges(BadgesCommand),

    /// Compare the stored task verdict against the recomputed one
    Tasks(TasksCommand),

    /// Recompute DMSt scores and diff against API points
    Scoring(ScoringCommand),

    /// Render the per-pilot best-result report
    Report(ReportCommand),

    /// Merge pasted verification data into the leaderboard
    Verify(VerifyCommand),

    /// Inline a JSON blob into a static HTML page
    Embed(EmbedCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "glstats");
    }

    #[test]
    fn test_verbosity_mapping() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap();

        let cli = parse(&["glstats", "badges"]);
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = parse(&["glstats", "-v", "badges"]);
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = parse(&["glstats", "-vv", "badges"]);
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);

        let cli = parse(&["glstats", "-q", "badges"]);
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_parse_badges() {
        let cli = Cli::try_parse_from(["glstats", "badges", "-i", "flights.jsonl"]).unwrap();
        match cli.command {
            Command::Badges(cmd) => {
                assert_eq!(cmd.input, Some(PathBuf::from("flights.jsonl")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_scoring_with_tolerance() {
        let cli = Cli::try_parse_from(["glstats", "scoring", "--tolerance", "0.5"]).unwrap();
        match cli.command {
            Command::Scoring(cmd) => assert_eq!(cmd.tolerance, Some(0.5)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_verify() {
        let cli = Cli::try_parse_from(["glstats", "verify", "--temp", "tmp.json"]).unwrap();
        assert!(matches!(cli.command, Command::Verify(_)));
    }

    #[test]
    fn test_parse_embed() {
        let cli = Cli::try_parse_from(["glstats", "embed", "page.html"]).unwrap();
        match cli.command {
            Command::Embed(cmd) => assert_eq!(cmd.html, PathBuf::from("page.html")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["glstats", "-c", "/custom/config.toml", "report"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
