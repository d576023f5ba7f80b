//! Task-completion criterion comparison.
//!
//! A flight carries two independently derived verdicts on whether its
//! declared task was achieved: the stored `task_achieved` flag, and a local
//! recomputation from the contest list (any allow-set contest whose score
//! carries a truthy `declared` flag). The two are known to disagree on a
//! nontrivial fraction of records; this module only reports the
//! disagreements with enough context to diagnose them. Which verdict is
//! correct is a domain policy question and is not decided here.

use std::fmt::Write as _;

use serde::Serialize;

use crate::flight::{Contest, Flight};

/// One flight where the two verdicts disagree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    /// Flight identifier.
    pub flight_id: Option<i64>,
    /// Pilot display name.
    pub pilot_name: Option<String>,
    /// The stored `task_achieved` flag (absent counts as false).
    pub stored: bool,
    /// The locally recomputed verdict.
    pub recomputed: bool,
    /// Contest entries whose names match the allow-set, for diagnosis.
    pub declared_contests: Vec<Contest>,
}

/// Summary of a full comparison run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskComparison {
    /// Flights inspected.
    pub checked: usize,
    /// Flights where both verdicts agree.
    pub agreements: usize,
    /// Flights where they disagree, with context.
    pub discrepancies: Vec<Discrepancy>,
}

/// Recompute the task verdict from the contest list.
///
/// True when any contest whose name is in `allow_set` has a truthy nested
/// `declared` flag. This is an existence check over a filtered list, not a
/// scoring computation.
#[must_use]
pub fn recomputed_task_achieved(flight: &Flight, allow_set: &[String]) -> bool {
    flight.contests().iter().any(|c| {
        c.name
            .as_deref()
            .is_some_and(|name| allow_set.iter().any(|a| a == name))
            && c.is_declared()
    })
}

/// Compare one flight's stored flag against the recomputed verdict.
///
/// Returns the discrepancy context when the two disagree, `None` otherwise.
#[must_use]
pub fn compare_flight(flight: &Flight, allow_set: &[String]) -> Option<Discrepancy> {
    let stored = flight.task_achieved.unwrap_or(false);
    let recomputed = recomputed_task_achieved(flight, allow_set);
    if stored == recomputed {
        return None;
    }

    let declared_contests = flight
        .contests()
        .iter()
        .filter(|c| {
            c.name
                .as_deref()
                .is_some_and(|name| allow_set.iter().any(|a| a == name))
        })
        .cloned()
        .collect();

    Some(Discrepancy {
        flight_id: flight.id,
        pilot_name: flight.pilot_name().map(str::to_string),
        stored,
        recomputed,
        declared_contests,
    })
}

/// Compare every flight in the dataset.
#[must_use]
pub fn compare_all(flights: &[Flight], allow_set: &[String]) -> TaskComparison {
    let mut report = TaskComparison {
        checked: flights.len(),
        ..TaskComparison::default()
    };
    for flight in flights {
        match compare_flight(flight, allow_set) {
            Some(d) => report.discrepancies.push(d),
            None => report.agreements += 1,
        }
    }
    report
}

impl TaskComparison {
    /// Render the human-readable report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Task criterion comparison");
        let _ = writeln!(out, "-------------------------");
        let _ = writeln!(out, "Flights checked: {}", self.checked);
        let _ = writeln!(out, "Agreements:      {}", self.agreements);
        let _ = writeln!(out, "Discrepancies:   {}", self.discrepancies.len());

        for d in &self.discrepancies {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "flight {} ({}): stored={} recomputed={}",
                d.flight_id.map_or_else(|| "?".to_string(), |id| id.to_string()),
                d.pilot_name.as_deref().unwrap_or("Unknown"),
                d.stored,
                d.recomputed
            );
            for c in &d.declared_contests {
                let _ = writeln!(
                    out,
                    "  contest {}: declared={} points={}",
                    c.name.as_deref().unwrap_or("?"),
                    c.is_declared(),
                    c.points.map_or_else(|| "?".to_string(), |p| format!("{p:.1}")),
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow() -> Vec<String> {
        vec!["au".to_string()]
    }

    fn flight(json: &str) -> Flight {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_recomputed_true_when_allowed_contest_declared() {
        let f = flight(
            r#"{"contest": [
                {"name": "free", "score": {"declared": true}},
                {"name": "au", "score": {"declared": true}}
            ]}"#,
        );
        assert!(recomputed_task_achieved(&f, &allow()));
    }

    #[test]
    fn test_recomputed_false_when_declared_outside_allow_set() {
        let f = flight(r#"{"contest": [{"name": "free", "score": {"declared": true}}]}"#);
        assert!(!recomputed_task_achieved(&f, &allow()));
    }

    #[test]
    fn test_recomputed_false_without_contests() {
        assert!(!recomputed_task_achieved(&flight("{}"), &allow()));
    }

    #[test]
    fn test_agreement_yields_no_discrepancy() {
        let f = flight(
            r#"{"task_achieved": true,
                "contest": [{"name": "au", "score": {"declared": true}}]}"#,
        );
        assert!(compare_flight(&f, &allow()).is_none());
    }

    #[test]
    fn test_stored_true_recomputed_false_is_flagged() {
        let f = flight(
            r#"{"id": 5, "user": {"name": "P"},
                "task_achieved": true,
                "contest": [{"name": "au", "points": 120.0,
                             "score": {"declared": false}}]}"#,
        );
        let d = compare_flight(&f, &allow()).unwrap();
        assert!(d.stored);
        assert!(!d.recomputed);
        // The au entry is included even though its declared flag is false:
        // that is exactly the context needed to diagnose the disagreement.
        assert_eq!(d.declared_contests.len(), 1);
        assert_eq!(d.declared_contests[0].name.as_deref(), Some("au"));
    }

    #[test]
    fn test_stored_false_recomputed_true_is_flagged() {
        let f = flight(
            r#"{"id": 6,
                "contest": [{"name": "au", "score": {"declared": true}}]}"#,
        );
        let d = compare_flight(&f, &allow()).unwrap();
        assert!(!d.stored);
        assert!(d.recomputed);
    }

    #[test]
    fn test_compare_all_counts() {
        let flights = vec![
            flight(r#"{"task_achieved": false}"#),
            flight(r#"{"contest": [{"name": "au", "score": {"declared": true}}]}"#),
        ];
        let report = compare_all(&flights, &allow());
        assert_eq!(report.checked, 2);
        assert_eq!(report.agreements, 1);
        assert_eq!(report.discrepancies.len(), 1);
    }

    #[test]
    fn test_render_mentions_discrepancy() {
        let flights = vec![flight(
            r#"{"id": 9, "contest": [{"name": "au", "score": {"declared": true}}]}"#,
        )];
        let text = compare_all(&flights, &allow()).render();
        assert!(text.contains("Discrepancies:   1"));
        assert!(text.contains("flight 9"));
        assert!(text.contains("contest au"));
    }
}
