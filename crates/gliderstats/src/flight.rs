//! Flight record model for gliderstats.
//!
//! Records come from a line-delimited JSON dataset and are loosely typed:
//! every field is optional and absence is treated as "unknown". Accessors
//! exist for the lookups that would otherwise need chains of `as_ref`.

use serde::{Deserialize, Serialize};

/// A pilot identity attached to a flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pilot {
    /// Unique pilot identifier.
    pub id: Option<i64>,
    /// Display name.
    pub name: Option<String>,
}

/// A badge achievement attached to a flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    /// Badge identifier, e.g. `"silver"`.
    pub badge_id: Option<String>,
}

/// The scored sub-result inside a contest entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    /// Shape name of the scored flight, e.g. `"TR"` or `"FR"`.
    pub name: Option<String>,
    /// Scored distance in kilometers.
    pub distance: Option<f64>,
    /// Whether the score came from a pre-announced declaration.
    pub declared: Option<bool>,
}

/// One scoring method's result for a flight.
///
/// A flight may carry several contest entries, one per scoring method
/// (e.g. `"au"`, `"free"`), each with its own points and geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contest {
    /// Scoring method name.
    pub name: Option<String>,
    /// Points awarded by this method.
    pub points: Option<f64>,
    /// Scored distance in kilometers.
    pub distance: Option<f64>,
    /// Average speed in km/h.
    pub speed: Option<f64>,
    /// Nested score detail.
    pub score: Option<Score>,
}

/// A declared task attached to a flight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Task kind, e.g. `"TR"` (triangle) or `"GL"` (goal).
    pub kind: Option<String>,
    /// Human-readable task name.
    pub name: Option<String>,
    /// Declared task distance in kilometers.
    pub distance: Option<f64>,
}

/// A named contextual label (airport, club).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Named {
    /// Display name.
    pub name: Option<String>,
}

/// One flight record from the JSONL dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flight {
    /// Unique flight identifier.
    pub id: Option<i64>,
    /// Pilot identity.
    pub user: Option<Pilot>,
    /// Whether the pilot is in the junior age category.
    pub junior: Option<bool>,
    /// Badge achievements earned on this flight.
    pub achievement: Option<Vec<Achievement>>,
    /// Per-scoring-method contest results.
    pub contest: Option<Vec<Contest>>,
    /// Declared task, if any.
    pub task: Option<Task>,
    /// Externally computed task completion verdict.
    pub task_achieved: Option<bool>,
    /// Flight duration in seconds.
    pub total_seconds: Option<u64>,
    /// Takeoff airport label.
    pub takeoff_airport: Option<Named>,
    /// Club label.
    pub club: Option<Named>,
    /// DMSt handicap index (percent, e.g. 108).
    pub dmst_index: Option<i64>,
}

impl Flight {
    /// The contest list, or an empty slice when absent.
    #[must_use]
    pub fn contests(&self) -> &[Contest] {
        self.contest.as_deref().unwrap_or(&[])
    }

    /// The achievement list, or an empty slice when absent.
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        self.achievement.as_deref().unwrap_or(&[])
    }

    /// The pilot id, if present.
    #[must_use]
    pub fn pilot_id(&self) -> Option<i64> {
        self.user.as_ref().and_then(|u| u.id)
    }

    /// The pilot name, if present.
    #[must_use]
    pub fn pilot_name(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.name.as_deref())
    }

    /// Whether the pilot is classified as a junior (absent counts as no).
    #[must_use]
    pub fn is_junior(&self) -> bool {
        self.junior.unwrap_or(false)
    }

    /// Whether any achievement on this flight carries the given badge.
    #[must_use]
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.achievements()
            .iter()
            .any(|a| a.badge_id.as_deref() == Some(badge_id))
    }

    /// The contest entry with the given scoring method name, if present.
    #[must_use]
    pub fn contest_named(&self, name: &str) -> Option<&Contest> {
        self.contests()
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
    }

    /// The takeoff airport name, if present.
    #[must_use]
    pub fn takeoff_name(&self) -> Option<&str> {
        self.takeoff_airport.as_ref().and_then(|n| n.name.as_deref())
    }

    /// The club name, if present.
    #[must_use]
    pub fn club_name(&self) -> Option<&str> {
        self.club.as_ref().and_then(|n| n.name.as_deref())
    }
}

impl Contest {
    /// Whether this contest's score carries a truthy `declared` flag.
    #[must_use]
    pub fn is_declared(&self) -> bool {
        self.score
            .as_ref()
            .and_then(|s| s.declared)
            .unwrap_or(false)
    }
}

/// Format a duration in seconds as `"{hours}h {minutes}m"`.
///
/// Zero or missing input yields `"Unknown"`; seconds are truncated, never
/// rounded.
#[must_use]
pub fn format_duration(total_seconds: Option<u64>) -> String {
    match total_seconds {
        None | Some(0) => "Unknown".to_string(),
        Some(secs) => {
            let hours = secs / 3600;
            let minutes = (secs % 3600) / 60;
            format!("{hours}h {minutes}m")
        }
    }
}
