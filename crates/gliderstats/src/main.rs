//! `glstats` - CLI for gliderstats
//!
//! This binary scans the flights dataset and runs the requested report:
//! badge statistics, task-criterion comparison, scoring verification, pilot
//! report, leaderboard verification merge, or HTML embedding.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;

use gliderstats::badges::collect_badge_stats;
use gliderstats::cli::{
    BadgesCommand, Cli, Command, ConfigCommand, EmbedCommand, ReportCommand, ScoringCommand,
    TasksCommand, VerifyCommand,
};
use gliderstats::embed::{embed_file, DEFAULT_MARKER};
use gliderstats::report::build_report;
use gliderstats::scoring::check_flights;
use gliderstats::taskcheck::compare_all;
use gliderstats::verify::merge_verifications;
use gliderstats::{init_logging, read_flights, Config, Scan};

/// Exit code for the missing verification temp file.
const EXIT_VERIFICATION_MISSING: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Badges(cmd) => handle_badges(&config, &cmd).await,
        Command::Tasks(cmd) => handle_tasks(&config, &cmd).await,
        Command::Scoring(cmd) => handle_scoring(&config, &cmd).await,
        Command::Report(cmd) => handle_report(&config, &cmd).await,
        Command::Verify(cmd) => handle_verify(&config, &cmd),
        Command::Embed(cmd) => handle_embed(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Scan the dataset, honoring a per-command path override.
async fn scan_dataset(config: &Config, input: Option<&PathBuf>) -> anyhow::Result<Scan> {
    let path = input.cloned().unwrap_or_else(|| config.flights_path());
    Ok(read_flights(&path).await?)
}

async fn handle_badges(config: &Config, cmd: &BadgesCommand) -> anyhow::Result<()> {
    let scan = scan_dataset(config, cmd.input.as_ref()).await?;
    let stats = collect_badge_stats(&scan, &config.report.badge_id);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats.render(&config.report.badge_id));
    }
    let path = stats.write_summary(&config.dataset.output_dir)?;
    if !cmd.json {
        println!();
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

async fn handle_tasks(config: &Config, cmd: &TasksCommand) -> anyhow::Result<()> {
    let scan = scan_dataset(config, cmd.input.as_ref()).await?;
    let comparison = compare_all(&scan.flights, &config.tasks.declared_contest_names);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print!("{}", comparison.render());
    }
    Ok(())
}

async fn handle_scoring(config: &Config, cmd: &ScoringCommand) -> anyhow::Result<()> {
    let scan = scan_dataset(config, cmd.input.as_ref()).await?;
    let tolerance = cmd.tolerance.unwrap_or(config.scoring.tolerance);
    let sample = cmd.sample.unwrap_or(config.scoring.mismatch_sample);

    let report = check_flights(&scan.flights, &config.scoring.contest_name, tolerance);
    print!("{}", report.render(sample));
    Ok(())
}

async fn handle_report(config: &Config, cmd: &ReportCommand) -> anyhow::Result<()> {
    let scan = scan_dataset(config, cmd.input.as_ref()).await?;
    let report = build_report(&scan.flights);
    print!("{}", report.render());

    if cmd.write_json {
        let path = report.write_json(&config.dataset.output_dir)?;
        println!();
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn handle_verify(config: &Config, cmd: &VerifyCommand) -> anyhow::Result<()> {
    let temp = cmd
        .temp
        .clone()
        .unwrap_or_else(|| config.verification_temp_path());
    let store = cmd
        .leaderboard
        .clone()
        .unwrap_or_else(|| config.leaderboard_path());

    match merge_verifications(&temp, &store) {
        Ok(outcome) => {
            println!(
                "Merged {} new and {} updated verification(s); {} total in {}",
                outcome.added,
                outcome.updated,
                outcome.total,
                store.display()
            );
            Ok(())
        }
        Err(err) if err.is_verification_missing() => {
            eprintln!("{err}");
            std::process::exit(EXIT_VERIFICATION_MISSING);
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_embed(config: &Config, cmd: &EmbedCommand) -> anyhow::Result<()> {
    let data = cmd
        .data
        .clone()
        .unwrap_or_else(|| config.leaderboard_path());
    let output = cmd.output.clone().unwrap_or_else(|| {
        let stem = cmd
            .html
            .file_stem()
            .map_or_else(|| "page".to_string(), |s| s.to_string_lossy().into_owned());
        cmd.html.with_file_name(format!("{stem}_standalone.html"))
    });
    let marker = cmd.marker.as_deref().unwrap_or(DEFAULT_MARKER);

    let matched = embed_file(&cmd.html, &data, &output, marker)?;
    if matched {
        println!("Wrote self-contained page to {}", output.display());
    } else {
        println!(
            "Marker not found in {}; wrote unmodified copy to {}",
            cmd.html.display(),
            output.display()
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Dataset]");
                println!("  Flights:       {}", config.flights_path().display());
                println!("  Leaderboard:   {}", config.leaderboard_path().display());
                println!(
                    "  Temp file:     {}",
                    config.verification_temp_path().display()
                );
                println!(
                    "  Output dir:    {}",
                    config.dataset.output_dir.display()
                );
                println!();
                println!("[Scoring]");
                println!("  Contest:       {}", config.scoring.contest_name);
                println!("  Tolerance:     {}", config.scoring.tolerance);
                println!("  Sample size:   {}", config.scoring.mismatch_sample);
                println!();
                println!("[Tasks]");
                println!(
                    "  Declared set:  {}",
                    config.tasks.declared_contest_names.join(", ")
                );
                println!();
                println!("[Report]");
                println!("  Badge:         {}", config.report.badge_id);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
