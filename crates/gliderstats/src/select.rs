//! Best-candidate selection.
//!
//! The one primitive shared by every report: given a flight's contest list
//! and a numeric field, pick the entry with the maximum positive value. The
//! same shape is used for best distance, best points and best speed.

/// Select the candidate with the maximum positive value of the given field.
///
/// Comparison is strictly-greater-than, so the first candidate to reach the
/// maximum wins and later ties do not replace it. Candidates whose accessor
/// returns `None` or a non-positive value never beat the running best.
/// Returns `None` when the collection is absent, empty, or has no positive
/// candidate.
pub fn best_by<'a, T, F>(candidates: Option<&'a [T]>, field: F) -> Option<(&'a T, f64)>
where
    F: Fn(&T) -> Option<f64>,
{
    let mut best: Option<(&T, f64)> = None;
    for candidate in candidates.unwrap_or(&[]) {
        let Some(value) = field(candidate) else {
            continue;
        };
        if value <= 0.0 {
            continue;
        }
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((candidate, value)),
        }
    }
    best
}

/// Format a selected quantity with one decimal place and a unit suffix.
///
/// A missing or non-positive value renders as `"Unknown"` rather than
/// `"0.0 km"`.
#[must_use]
pub fn format_quantity(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v > 0.0 => format!("{v:.1}{unit}"),
        _ => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        label: &'static str,
        value: Option<f64>,
    }

    fn entry(label: &'static str, value: Option<f64>) -> Entry {
        Entry { label, value }
    }

    #[test]
    fn test_best_by_picks_maximum() {
        let entries = vec![
            entry("a", Some(10.0)),
            entry("b", Some(42.5)),
            entry("c", Some(17.0)),
        ];
        let (best, value) = best_by(Some(entries.as_slice()), |e| e.value).unwrap();
        assert_eq!(best.label, "b");
        assert!((value - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_best_by_first_of_ties_wins() {
        let entries = vec![
            entry("first", Some(30.0)),
            entry("second", Some(30.0)),
            entry("third", Some(12.0)),
        ];
        let (best, _) = best_by(Some(entries.as_slice()), |e| e.value).unwrap();
        assert_eq!(best.label, "first");
    }

    #[test]
    fn test_best_by_ignores_missing_and_nonpositive() {
        let entries = vec![
            entry("missing", None),
            entry("zero", Some(0.0)),
            entry("negative", Some(-5.0)),
            entry("ok", Some(1.5)),
        ];
        let (best, _) = best_by(Some(entries.as_slice()), |e| e.value).unwrap();
        assert_eq!(best.label, "ok");
    }

    #[test]
    fn test_best_by_no_candidate() {
        let empty: Vec<Entry> = vec![];
        assert!(best_by(Some(empty.as_slice()), |e: &Entry| e.value).is_none());
        assert!(best_by(None, |e: &Entry| e.value).is_none());

        let all_bad = vec![entry("a", None), entry("b", Some(0.0))];
        assert!(best_by(Some(all_bad.as_slice()), |e| e.value).is_none());
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(Some(287.25), " km"), "287.2 km");
        assert_eq!(format_quantity(Some(310.0), " pts"), "310.0 pts");
        assert_eq!(format_quantity(Some(95.67), " km/h"), "95.7 km/h");
        assert_eq!(format_quantity(Some(0.0), " km"), "Unknown");
        assert_eq!(format_quantity(None, " km"), "Unknown");
    }
}
