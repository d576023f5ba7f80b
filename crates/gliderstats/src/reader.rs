//! Line-delimited JSON dataset reader.
//!
//! Each non-blank line of the dataset is one flight record. Lines that fail
//! to parse are skipped and counted, never fatal; the scan always runs to the
//! end of the file.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::flight::Flight;

/// The outcome of scanning a JSONL dataset.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    /// Records that parsed successfully, in file order.
    pub flights: Vec<Flight>,
    /// Number of non-blank lines that failed to parse.
    pub skipped: usize,
}

/// Read all flight records from a JSONL file.
///
/// Blank lines are ignored. Malformed lines are counted in [`Scan::skipped`]
/// and logged at debug level.
///
/// # Errors
///
/// Returns [`Error::DatasetOpen`] if the file cannot be opened, or an I/O
/// error if reading fails mid-scan.
pub async fn read_flights(path: impl AsRef<Path>) -> Result<Scan> {
    let path = path.as_ref();
    let file = File::open(path).await.map_err(|source| Error::DatasetOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = BufReader::new(file).lines();
    let mut scan = Scan::default();
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Flight>(line) {
            Ok(flight) => scan.flights.push(flight),
            Err(err) => {
                debug!("skipping line {line_no}: {err}");
                scan.skipped += 1;
            }
        }
    }

    if scan.skipped > 0 {
        warn!(
            "skipped {} unparseable line(s) in {}",
            scan.skipped,
            path.display()
        );
    }
    debug!(
        "read {} flight(s) from {}",
        scan.flights.len(),
        path.display()
    );
    Ok(scan)
}
