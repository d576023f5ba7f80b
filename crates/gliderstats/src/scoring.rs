//! DMSt scoring sanity check.
//!
//! For each flight we recompute the DMSt free score (from the contest
//! geometry and the handicap index) and the DMSt task score (from the
//! declared task distance plus shape and completion bonuses), then compare
//! against the points reported by the API. Small rounding differences are
//! tolerated; larger mismatches are collected for inspection of the raw
//! data.

use std::fmt::Write as _;

use serde::Serialize;

use crate::flight::Flight;

/// Completion bonus applied on top of the shape bonus when a declared task
/// was achieved.
const COMPLETION_BONUS: f64 = 0.30;

/// DMSt shape bonus by contest/task kind.
///
/// Unknown or missing kinds score no bonus.
#[must_use]
pub fn dmst_bonus(kind: Option<&str>) -> f64 {
    let Some(kind) = kind else {
        return 0.0;
    };
    match kind.to_uppercase().as_str() {
        "TR" | "TRIANGLE" | "RT" | "RECTANGLE" => 0.40,
        "OR" | "OUT_RETURN" | "GL" | "OUT" | "GOAL" | "DECLARATION" => 0.30,
        "MTR" => 0.20,
        _ => 0.0,
    }
}

/// Recomputed scores for one flight, paired with the API-reported values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCheck {
    /// Flight identifier.
    pub flight_id: Option<i64>,
    /// DMSt handicap index (percent).
    pub dmst_index: i64,
    /// Recomputed free score.
    pub free_expected: Option<f64>,
    /// API-reported free score.
    pub free_actual: Option<f64>,
    /// Recomputed task score.
    pub task_expected: Option<f64>,
    /// API-reported task score.
    pub task_actual: Option<f64>,
    /// Which branch produced the task score.
    pub task_notes: &'static str,
}

impl ScoreCheck {
    /// Whether the free scores agree within `tolerance`.
    ///
    /// A missing value on either side counts as agreement; the check only
    /// flags pairs where both values exist and differ.
    #[must_use]
    pub fn free_matches(&self, tolerance: f64) -> bool {
        match (self.free_expected, self.free_actual) {
            (Some(expected), Some(actual)) => (expected - actual).abs() <= tolerance,
            _ => true,
        }
    }

    /// Whether the task scores agree within `tolerance`.
    #[must_use]
    pub fn task_matches(&self, tolerance: f64) -> bool {
        match (self.task_expected, self.task_actual) {
            (Some(expected), Some(actual)) => (expected - actual).abs() <= tolerance,
            _ => true,
        }
    }
}

/// Recompute the DMSt scores for one flight.
///
/// Returns `None` for flights that cannot be checked: no handicap index, or
/// no contest entry under `contest_name`.
#[must_use]
pub fn check_flight(flight: &Flight, contest_name: &str) -> Option<ScoreCheck> {
    let dmst_index = flight.dmst_index.filter(|i| *i != 0)?;
    #[allow(clippy::cast_precision_loss)]
    let idx_factor = dmst_index as f64 / 100.0;

    let contest = flight.contest_named(contest_name)?;
    let score = contest.score.as_ref();
    let score_distance = score.and_then(|s| s.distance).filter(|d| *d > 0.0);
    let score_name = score.and_then(|s| s.name.as_deref());
    let declared = score.and_then(|s| s.declared);

    let mut check = ScoreCheck {
        flight_id: flight.id,
        dmst_index,
        free_expected: None,
        free_actual: contest.points,
        task_expected: None,
        task_actual: None,
        task_notes: "",
    };

    if let Some(dist) = score_distance {
        check.free_expected = Some(dist * (1.0 + dmst_bonus(score_name)) / idx_factor);
    }

    let task = flight.task.as_ref();
    let task_distance = task.and_then(|t| t.distance).filter(|d| *d > 0.0);
    let task_kind = task.and_then(|t| t.kind.as_deref());
    let task_achieved = flight.task_achieved == Some(true);

    if let Some(base) = task_distance {
        let mut multiplier = 1.0 + dmst_bonus(task_kind);
        if task_achieved {
            multiplier += COMPLETION_BONUS;
        }
        check.task_expected = Some(base * multiplier / idx_factor);
        check.task_notes = "actual";
    } else if declared == Some(true) {
        if let Some(base) = score_distance {
            let multiplier = 1.0 + dmst_bonus(score_name) + COMPLETION_BONUS;
            check.task_expected = Some(base * multiplier / idx_factor);
            check.task_notes = "from contest distance";
        }
    }

    // An undeclared flight has no DMSt task score.
    if declared == Some(false) && check.free_expected.is_some() {
        check.task_expected = None;
    }

    Some(check)
}

/// Summary of a full scoring verification run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringReport {
    /// Flights that could be checked.
    pub checked: usize,
    /// Free-score mismatches beyond tolerance.
    pub free_mismatches: Vec<ScoreCheck>,
    /// Task-score mismatches beyond tolerance.
    pub task_mismatches: Vec<ScoreCheck>,
}

/// Run the scoring check over every flight.
#[must_use]
pub fn check_flights(flights: &[Flight], contest_name: &str, tolerance: f64) -> ScoringReport {
    let checks: Vec<ScoreCheck> = flights
        .iter()
        .filter_map(|f| check_flight(f, contest_name))
        .collect();

    let free_mismatches = checks
        .iter()
        .filter(|c| !c.free_matches(tolerance))
        .cloned()
        .collect();
    let task_mismatches = checks
        .iter()
        .filter(|c| !c.task_matches(tolerance))
        .cloned()
        .collect();

    ScoringReport {
        checked: checks.len(),
        free_mismatches,
        task_mismatches,
    }
}

impl ScoringReport {
    /// Render the human-readable report, printing at most `sample`
    /// mismatches per category.
    #[must_use]
    pub fn render(&self, sample: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Checked {} flights", self.checked);
        let _ = writeln!(out, "DMSt Free mismatches: {}", self.free_mismatches.len());
        let _ = writeln!(out, "DMSt Task mismatches: {}", self.task_mismatches.len());

        if !self.free_mismatches.is_empty() {
            let _ = writeln!(out, "\nSample free mismatches:");
            for c in self.free_mismatches.iter().take(sample) {
                let _ = writeln!(
                    out,
                    "flight {} (H={}) -> calc {} / api {}",
                    c.flight_id.map_or_else(|| "?".to_string(), |id| id.to_string()),
                    c.dmst_index,
                    fmt_opt(c.free_expected),
                    fmt_opt(c.free_actual),
                );
            }
        }
        if !self.task_mismatches.is_empty() {
            let _ = writeln!(out, "\nSample task mismatches:");
            for c in self.task_mismatches.iter().take(sample) {
                let _ = writeln!(
                    out,
                    "flight {} (H={}) -> calc {} / api {} [{}]",
                    c.flight_id.map_or_else(|| "?".to_string(), |id| id.to_string()),
                    c.dmst_index,
                    fmt_opt(c.task_expected),
                    fmt_opt(c.task_actual),
                    c.task_notes,
                );
            }
        }
        out
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}
