//! Badge achievement statistics.
//!
//! A single pass over the scanned flights counting badge holders and junior
//! pilots, with a deduplicated list of the juniors who earned the badge.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::collect::UniqueList;
use crate::error::Result;
use crate::reader::Scan;

/// File name of the JSON summary written next to the text report.
const SUMMARY_FILE_NAME: &str = "badge_summary.json";

/// One junior pilot who earned the badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JuniorEntry {
    /// Pilot identifier (absent pilots are keyed as unknown).
    pub pilot_id: Option<i64>,
    /// Pilot display name.
    pub pilot_name: Option<String>,
    /// The flight on which the badge was earned.
    pub flight_id: Option<i64>,
}

/// Aggregate badge statistics for one dataset scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStats {
    /// Number of flights that parsed.
    pub total_flights: usize,
    /// Number of flights flown by juniors.
    pub total_juniors: usize,
    /// Number of flights carrying the badge.
    pub total_silver_badges: usize,
    /// Number of junior flights carrying the badge.
    pub junior_silver_badges: usize,
    /// Juniors who earned the badge, first flight per pilot.
    pub juniors: Vec<JuniorEntry>,
    /// Lines in the dataset that failed to parse.
    pub skipped_lines: usize,
}

/// Compute badge statistics over a scan.
///
/// The juniors list is deduplicated by pilot id with first-seen-wins
/// semantics; a later flight by the same junior does not replace the entry.
#[must_use]
pub fn collect_badge_stats(scan: &Scan, badge_id: &str) -> BadgeStats {
    let mut total_juniors = 0;
    let mut total_badges = 0;
    let mut junior_badges = 0;
    let mut juniors = UniqueList::new();

    for flight in &scan.flights {
        let junior = flight.is_junior();
        let has_badge = flight.has_badge(badge_id);

        if junior {
            total_juniors += 1;
        }
        if has_badge {
            total_badges += 1;
        }
        if junior && has_badge {
            junior_badges += 1;
            juniors.insert_by_key(
                JuniorEntry {
                    pilot_id: flight.pilot_id(),
                    pilot_name: flight.pilot_name().map(str::to_string),
                    flight_id: flight.id,
                },
                |e| e.pilot_id,
            );
        }
    }

    BadgeStats {
        total_flights: scan.flights.len(),
        total_juniors,
        total_silver_badges: total_badges,
        junior_silver_badges: junior_badges,
        juniors: juniors.into_items(),
        skipped_lines: scan.skipped,
    }
}

impl BadgeStats {
    /// Render the human-readable report.
    #[must_use]
    pub fn render(&self, badge_id: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Badge report ({badge_id})");
        let _ = writeln!(out, "--------------------");
        let _ = writeln!(out, "Total flights:        {}", self.total_flights);
        let _ = writeln!(out, "Junior flights:       {}", self.total_juniors);
        let _ = writeln!(out, "Badge flights:        {}", self.total_silver_badges);
        let _ = writeln!(out, "Junior badge flights: {}", self.junior_silver_badges);
        if self.skipped_lines > 0 {
            let _ = writeln!(out, "Skipped lines:        {}", self.skipped_lines);
        }
        if !self.juniors.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Juniors with the badge:");
            for (i, entry) in self.juniors.iter().enumerate() {
                let name = entry.pilot_name.as_deref().unwrap_or("Unknown");
                let _ = writeln!(out, "{}. {name}", i + 1);
            }
        }
        out
    }

    /// Write the pretty-printed JSON summary into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_summary(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(SUMMARY_FILE_NAME);
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        info!("wrote badge summary to {}", path.display());
        Ok(path)
    }
}
