//! Pilot verification merge workflow.
//!
//! The leaderboard carries manually verified pilot data (PIC hours and the
//! date the check was done). New data arrives by hand: someone pastes it
//! into a temporary JSON file, runs `glstats verify`, and the entries are
//! merged into the persisted leaderboard file. The temp file is deleted
//! after a successful merge. This is a human-in-the-loop data entry
//! workflow, not an API.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Description written into a freshly created leaderboard file.
const DEFAULT_DESCRIPTION: &str = "Manually verified pilot data for the flight leaderboard";

/// One pilot's verification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    /// Pilot display name.
    pub pilot_name: Option<String>,
    /// Verified pilot-in-command hours.
    pub pic_hours: Option<f64>,
    /// Date the verification was performed (`YYYY-MM-DD`).
    pub verified_date: Option<String>,
}

/// The persisted leaderboard verification file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaderboard {
    /// Free-text description of the file's purpose.
    pub description: String,
    /// Verifications keyed by pilot identifier.
    pub verifications: BTreeMap<String, Verification>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            verifications: BTreeMap::new(),
        }
    }
}

/// The temp file shape: just the verifications mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct VerificationInput {
    verifications: BTreeMap<String, Verification>,
}

/// Outcome of one merge run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Entries that were new to the leaderboard.
    pub added: usize,
    /// Entries that replaced an existing pilot's record.
    pub updated: usize,
    /// Total entries in the leaderboard after the merge.
    pub total: usize,
}

/// Load the persisted leaderboard, or a fresh default when the file is
/// absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_leaderboard(path: &Path) -> Result<Leaderboard> {
    if !path.exists() {
        debug!("no leaderboard at {}, starting fresh", path.display());
        return Ok(Leaderboard::default());
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| Error::json_file(path, source))
}

/// Merge the manually created temp file into the persisted leaderboard.
///
/// Incoming entries overwrite same-key entries: the temp file is the manual
/// correction channel, so the newest manual data wins. Entries without a
/// `verifiedDate` are stamped with today's date. The temp file is deleted
/// after the leaderboard has been written.
///
/// # Errors
///
/// Returns [`Error::VerificationFileMissing`] when the temp file is absent,
/// or an I/O / parse error if either file cannot be handled.
pub fn merge_verifications(temp_path: &Path, store_path: &Path) -> Result<MergeOutcome> {
    if !temp_path.exists() {
        return Err(Error::VerificationFileMissing {
            path: temp_path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(temp_path)?;
    let input: VerificationInput =
        serde_json::from_str(&raw).map_err(|source| Error::json_file(temp_path, source))?;

    let mut leaderboard = load_leaderboard(store_path)?;
    let today = Local::now().date_naive().to_string();

    let mut added = 0;
    let mut updated = 0;
    for (pilot_id, mut verification) in input.verifications {
        if verification.verified_date.is_none() {
            verification.verified_date = Some(today.clone());
        }
        if leaderboard
            .verifications
            .insert(pilot_id, verification)
            .is_some()
        {
            updated += 1;
        } else {
            added += 1;
        }
    }

    if let Some(parent) = store_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(store_path, serde_json::to_string_pretty(&leaderboard)?)?;
    std::fs::remove_file(temp_path)?;

    info!(
        "merged verifications: {added} added, {updated} updated, {} total",
        leaderboard.verifications.len()
    );
    Ok(MergeOutcome {
        added,
        updated,
        total: leaderboard.verifications.len(),
    })
}
