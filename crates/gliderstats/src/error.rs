//! Error types for gliderstats.
//!
//! This module defines all error types used throughout the gliderstats crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gliderstats operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Dataset Errors ===
    /// Failed to open the flights dataset.
    #[error("failed to open dataset at {path}: {source}")]
    DatasetOpen {
        /// Path to the JSONL dataset file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON file exists but could not be parsed.
    #[error("failed to parse JSON file {path}: {source}")]
    JsonFile {
        /// Path to the offending file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Verification Workflow Errors ===
    /// The manually created verification temp file is missing.
    ///
    /// The display message carries remediation instructions because this is
    /// the expected first failure of the manual data-entry workflow.
    #[error(
        "verification input {path} not found.\n\
         Create it with a `verifications` object keyed by pilot id, e.g.\n\
         {{ \"verifications\": {{ \"1234\": {{ \"pilotName\": \"A. Pilot\", \
         \"picHours\": 120, \"verifiedDate\": \"2025-01-15\" }} }} }}\n\
         then re-run `glstats verify`"
    )]
    VerificationFileMissing {
        /// Expected path of the temp file.
        path: PathBuf,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for gliderstats operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a JSON file error carrying the file path.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::JsonFile {
            path: path.into(),
            source,
        }
    }

    /// Check if this error means the verification temp file is absent.
    ///
    /// The binary maps this case to a distinct exit code.
    #[must_use]
    pub fn is_verification_missing(&self) -> bool {
        matches!(self, Self::VerificationFileMissing { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::internal("something went wrong");
        assert_eq!(err.to_string(), "internal error: something went wrong");
    }

    #[test]
    fn test_verification_missing_carries_instructions() {
        let err = Error::VerificationFileMissing {
            path: PathBuf::from("verifications_tmp.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("verifications_tmp.json"));
        assert!(msg.contains("pilotName"));
        assert!(msg.contains("glstats verify"));
    }

    #[test]
    fn test_is_verification_missing() {
        let err = Error::VerificationFileMissing {
            path: PathBuf::from("tmp.json"),
        };
        assert!(err.is_verification_missing());
        assert!(!Error::internal("x").is_verification_missing());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_json_file_error_display() {
        let parse_err = serde_json::from_str::<i32>("nope").unwrap_err();
        let err = Error::json_file("leaderboard.json", parse_err);
        let msg = err.to_string();
        assert!(msg.contains("leaderboard.json"));
    }

    #[test]
    fn test_dataset_open_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::DatasetOpen {
            path: PathBuf::from("/data/flights.jsonl"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/flights.jsonl"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "tolerance must not be negative".to_string(),
        };
        assert!(err.to_string().contains("tolerance"));
    }
}
