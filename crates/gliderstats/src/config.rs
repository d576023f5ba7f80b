//! Configuration management for gliderstats.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "gliderstats";

/// Default flights dataset file name.
const FLIGHTS_FILE_NAME: &str = "australian_flights_2025_details.jsonl";

/// Default leaderboard file name.
const LEADERBOARD_FILE_NAME: &str = "leaderboard.json";

/// Default verification temp file name.
const VERIFICATION_TEMP_FILE_NAME: &str = "verifications_tmp.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GLIDERSTATS_`)
/// 2. TOML config file at `~/.config/gliderstats/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset locations.
    pub dataset: DatasetConfig,
    /// Scoring verification settings.
    pub scoring: ScoringConfig,
    /// Task-achieved comparison settings.
    pub tasks: TaskCheckConfig,
    /// Report settings.
    pub report: ReportConfig,
}

/// Dataset file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the flights JSONL file.
    /// Defaults to `australian_flights_2025_details.jsonl` in the working directory.
    pub flights_path: Option<PathBuf>,
    /// Path to the persisted leaderboard JSON file.
    /// Defaults to `leaderboard.json` in the working directory.
    pub leaderboard_path: Option<PathBuf>,
    /// Path of the manually created verification temp file.
    /// Defaults to `verifications_tmp.json` in the working directory.
    pub verification_temp_path: Option<PathBuf>,
    /// Directory where JSON summaries are written.
    pub output_dir: PathBuf,
}

/// Scoring verification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points tolerance before a recomputed score is flagged as a mismatch.
    pub tolerance: f64,
    /// Name of the contest whose geometry drives the recomputation.
    pub contest_name: String,
    /// Maximum number of mismatches printed per category.
    pub mismatch_sample: usize,
}

/// Task-achieved comparison settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskCheckConfig {
    /// Contest names whose declared score counts toward the recomputed verdict.
    pub declared_contest_names: Vec<String>,
}

/// Report settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Badge counted by the badges report.
    pub badge_id: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            flights_path: None,
            leaderboard_path: None,
            verification_temp_path: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.2,
            contest_name: "au".to_string(),
            mismatch_sample: 10,
        }
    }
}

impl Default for TaskCheckConfig {
    fn default() -> Self {
        Self {
            declared_contest_names: vec!["au".to_string()],
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            badge_id: "silver".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `GLIDERSTATS_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("GLIDERSTATS_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.scoring.tolerance < 0.0 {
            return Err(Error::ConfigValidation {
                message: format!(
                    "scoring tolerance must not be negative (got {})",
                    self.scoring.tolerance
                ),
            });
        }

        if self.scoring.contest_name.is_empty() {
            return Err(Error::ConfigValidation {
                message: "scoring contest_name must not be empty".to_string(),
            });
        }

        if self.tasks.declared_contest_names.is_empty() {
            return Err(Error::ConfigValidation {
                message: "tasks declared_contest_names must not be empty".to_string(),
            });
        }

        if self.report.badge_id.is_empty() {
            return Err(Error::ConfigValidation {
                message: "report badge_id must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Resolve the flights dataset path.
    #[must_use]
    pub fn flights_path(&self) -> PathBuf {
        self.dataset
            .flights_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(FLIGHTS_FILE_NAME))
    }

    /// Resolve the leaderboard path.
    #[must_use]
    pub fn leaderboard_path(&self) -> PathBuf {
        self.dataset
            .leaderboard_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(LEADERBOARD_FILE_NAME))
    }

    /// Resolve the verification temp file path.
    #[must_use]
    pub fn verification_temp_path(&self) -> PathBuf {
        self.dataset
            .verification_temp_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(VERIFICATION_TEMP_FILE_NAME))
    }
}
