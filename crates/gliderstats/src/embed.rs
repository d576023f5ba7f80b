//! Static HTML data embedding.
//!
//! Replaces the runtime fetch call inside a static HTML page with the
//! JSON-serialized data itself, producing a self-contained artifact that
//! works without a server. The replacement is textual; an unmatched marker
//! leaves the page unchanged (logged as a warning).

use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// The fetch expression replaced by the inlined blob.
pub const DEFAULT_MARKER: &str = r#"await fetch("leaderboard.json").then((r) => r.json())"#;

/// Replace `marker` in `html` with the JSON serialization of `data`.
///
/// Returns the rewritten page and whether the marker was found. The replace
/// is a no-op when unmatched.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
pub fn embed_json<T: Serialize>(html: &str, marker: &str, data: &T) -> Result<(String, bool)> {
    let blob = serde_json::to_string(data)?;
    let matched = html.contains(marker);
    Ok((html.replace(marker, &blob), matched))
}

/// Embed the contents of a JSON file into an HTML page on disk.
///
/// Reads `html_path`, substitutes the blob from `data_path` at `marker`, and
/// writes the result to `output_path`. Returns whether the marker matched.
///
/// # Errors
///
/// Returns an error if any file cannot be read, parsed, or written.
pub fn embed_file(
    html_path: &Path,
    data_path: &Path,
    output_path: &Path,
    marker: &str,
) -> Result<bool> {
    let html = std::fs::read_to_string(html_path)?;
    let raw = std::fs::read_to_string(data_path)?;
    let data: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| Error::json_file(data_path, source))?;

    let (rewritten, matched) = embed_json(&html, marker, &data)?;
    if matched {
        info!(
            "embedded {} into {}",
            data_path.display(),
            output_path.display()
        );
    } else {
        warn!(
            "marker not found in {}; output is an unmodified copy",
            html_path.display()
        );
    }
    std::fs::write(output_path, rewritten)?;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_embed_replaces_marker() {
        let html = format!("<script>const data = {DEFAULT_MARKER};</script>");
        let data = json!({"verifications": {}});
        let (out, matched) = embed_json(&html, DEFAULT_MARKER, &data).unwrap();
        assert!(matched);
        assert!(out.contains(r#"const data = {"verifications":{}};"#));
        assert!(!out.contains("fetch"));
    }

    #[test]
    fn test_unmatched_marker_is_noop() {
        let html = "<p>no script here</p>";
        let (out, matched) = embed_json(html, DEFAULT_MARKER, &json!(1)).unwrap();
        assert!(!matched);
        assert_eq!(out, html);
    }

    #[test]
    fn test_embed_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("gliderstats-embed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let html_path = dir.join("page.html");
        let data_path = dir.join("leaderboard.json");
        let out_path = dir.join("page_standalone.html");

        std::fs::write(
            &html_path,
            format!("<script>const board = {DEFAULT_MARKER};</script>"),
        )
        .unwrap();
        std::fs::write(&data_path, r#"{"description": "d", "verifications": {}}"#).unwrap();

        let matched = embed_file(&html_path, &data_path, &out_path, DEFAULT_MARKER).unwrap();
        assert!(matched);
        let out = std::fs::read_to_string(&out_path).unwrap();
        assert!(out.contains(r#""description":"d""#));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_embed_file_bad_data_reports_path() {
        let dir =
            std::env::temp_dir().join(format!("gliderstats-embed-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let html_path = dir.join("page.html");
        let data_path = dir.join("bad.json");
        std::fs::write(&html_path, "<p></p>").unwrap();
        std::fs::write(&data_path, "not json").unwrap();

        let err = embed_file(&html_path, &data_path, &dir.join("out.html"), DEFAULT_MARKER)
            .unwrap_err();
        assert!(err.to_string().contains("bad.json"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
