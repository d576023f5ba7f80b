//! Per-pilot best-result report.
//!
//! Builds one entry per pilot from the scanned flights (first flight per
//! pilot wins), selects the best contest distance, points and speed for that
//! flight, and renders a 1-indexed block per pilot sorted by name.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::collect::UniqueList;
use crate::error::Result;
use crate::flight::{format_duration, Flight};
use crate::select::{best_by, format_quantity};

/// File name of the JSON report written next to the text report.
const REPORT_FILE_NAME: &str = "pilot_report.json";

/// One pilot's report entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotEntry {
    /// Pilot identifier.
    pub pilot_id: Option<i64>,
    /// Pilot display name.
    pub pilot_name: Option<String>,
    /// The flight the entry was built from.
    pub flight_id: Option<i64>,
    /// Flight duration in seconds.
    pub total_seconds: Option<u64>,
    /// Takeoff airport label.
    pub takeoff: Option<String>,
    /// Club label.
    pub club: Option<String>,
    /// Best contest distance in kilometers.
    pub best_distance: Option<f64>,
    /// Best contest points.
    pub best_points: Option<f64>,
    /// Best contest speed in km/h.
    pub best_speed: Option<f64>,
}

impl PilotEntry {
    fn from_flight(flight: &Flight) -> Self {
        let contests = flight.contest.as_deref();
        Self {
            pilot_id: flight.pilot_id(),
            pilot_name: flight.pilot_name().map(str::to_string),
            flight_id: flight.id,
            total_seconds: flight.total_seconds,
            takeoff: flight.takeoff_name().map(str::to_string),
            club: flight.club_name().map(str::to_string),
            best_distance: best_by(contests, |c| c.distance).map(|(_, v)| v),
            best_points: best_by(contests, |c| c.points).map(|(_, v)| v),
            best_speed: best_by(contests, |c| c.speed).map(|(_, v)| v),
        }
    }
}

/// The assembled pilot report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotReport {
    /// Entries sorted by pilot name.
    pub entries: Vec<PilotEntry>,
}

/// Build the report: one entry per pilot, sorted by name.
///
/// Deduplication is by pilot id with first-seen-wins semantics; sorting is
/// case-insensitive on the display name, unnamed pilots last.
#[must_use]
pub fn build_report(flights: &[Flight]) -> PilotReport {
    let mut unique = UniqueList::new();
    for flight in flights {
        unique.insert_by_key(PilotEntry::from_flight(flight), |e| e.pilot_id);
    }

    let mut entries = unique.into_items();
    entries.sort_by_key(|e| match &e.pilot_name {
        Some(name) => (0, name.to_lowercase()),
        None => (1, String::new()),
    });
    PilotReport { entries }
}

impl PilotReport {
    /// Render the human-readable report, one block per pilot.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(out);
            }
            let _ = writeln!(out, "{}. {}", i + 1, e.pilot_name.as_deref().unwrap_or("Unknown"));
            let _ = writeln!(
                out,
                "   Flight:        {}",
                e.flight_id.map_or_else(|| "Unknown".to_string(), |id| id.to_string())
            );
            let _ = writeln!(out, "   Duration:      {}", format_duration(e.total_seconds));
            let _ = writeln!(
                out,
                "   Takeoff:       {}",
                e.takeoff.as_deref().unwrap_or("Unknown")
            );
            let _ = writeln!(
                out,
                "   Club:          {}",
                e.club.as_deref().unwrap_or("Unknown")
            );
            let _ = writeln!(
                out,
                "   Best distance: {}",
                format_quantity(e.best_distance, " km")
            );
            let _ = writeln!(
                out,
                "   Best points:   {}",
                format_quantity(e.best_points, " pts")
            );
            let _ = writeln!(
                out,
                "   Best speed:    {}",
                format_quantity(e.best_speed, " km/h")
            );
        }
        out
    }

    /// Write the pretty-printed JSON report into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_json(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(REPORT_FILE_NAME);
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        info!("wrote pilot report to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(json: &str) -> Flight {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_best_values_from_contests() {
        let report = build_report(&[flight(
            r#"{"id": 1, "user": {"id": 1, "name": "A"},
                "contest": [
                    {"name": "au", "points": 310.0, "distance": 287.0, "speed": 88.0},
                    {"name": "free", "points": 350.5, "distance": 250.0, "speed": 91.2}
                ]}"#,
        )]);
        let e = &report.entries[0];
        assert_eq!(e.best_distance, Some(287.0));
        assert_eq!(e.best_points, Some(350.5));
        assert_eq!(e.best_speed, Some(91.2));
    }

    #[test]
    fn test_dedup_by_pilot_keeps_first_flight() {
        let report = build_report(&[
            flight(r#"{"id": 1, "user": {"id": 7, "name": "A"}, "total_seconds": 3600}"#),
            flight(r#"{"id": 2, "user": {"id": 7, "name": "A"}, "total_seconds": 7200}"#),
        ]);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].flight_id, Some(1));
    }

    #[test]
    fn test_sorted_by_name_case_insensitive() {
        let report = build_report(&[
            flight(r#"{"id": 1, "user": {"id": 1, "name": "zoe"}}"#),
            flight(r#"{"id": 2, "user": {"id": 2, "name": "Adam"}}"#),
            flight(r#"{"id": 3, "user": {"id": 3}}"#),
        ]);
        let names: Vec<Option<&str>> = report
            .entries
            .iter()
            .map(|e| e.pilot_name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("Adam"), Some("zoe"), None]);
    }

    #[test]
    fn test_render_blocks_are_one_indexed_with_fallbacks() {
        let report = build_report(&[flight(
            r#"{"id": 5, "user": {"id": 1, "name": "A"}, "total_seconds": 3661}"#,
        )]);
        let text = report.render();
        assert!(text.starts_with("1. A"));
        assert!(text.contains("Duration:      1h 1m"));
        assert!(text.contains("Takeoff:       Unknown"));
        assert!(text.contains("Best distance: Unknown"));
    }

    #[test]
    fn test_zero_distance_renders_unknown_not_zero() {
        let report = build_report(&[flight(
            r#"{"user": {"id": 1, "name": "A"},
                "contest": [{"name": "au", "distance": 0.0}]}"#,
        )]);
        let text = report.render();
        assert!(text.contains("Best distance: Unknown"));
        assert!(!text.contains("0.0 km"));
    }

    #[test]
    fn test_write_json() {
        let dir = std::env::temp_dir().join(format!("gliderstats-report-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let report = build_report(&[flight(r#"{"id": 1, "user": {"id": 1, "name": "A"}}"#)]);
        let path = report.write_json(&dir).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("pilotName"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
