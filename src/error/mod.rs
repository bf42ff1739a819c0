//! Error types and handling for `verdict`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Supports `anyhow` integration for wrapped host errors
//! - Provides recovery hints for user-facing errors
//! - Provides structured JSON output for non-interactive callers

mod structured;

pub use structured::{ErrorCode, StructuredError};

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `verdict` operations.
#[derive(Error, Debug)]
pub enum VerdictError {
    // === Precondition Errors ===
    /// Test name carries no extension to strip for the report file name.
    #[error("Test name '{name}' has no file extension to strip")]
    MissingExtension { name: String },

    /// Run stamp was empty or blank.
    #[error("Run stamp is empty")]
    EmptyStamp,

    // === Write Errors ===
    /// Report directory could not be created.
    #[error("Could not create report directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be opened or written.
    #[error("Could not write report file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be flushed after writing.
    #[error("Could not flush report file '{path}': {source}")]
    FlushFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Run File Errors ===
    /// Run file could not be read or parsed.
    #[error("Run file '{path}': {reason}")]
    RunFile { path: PathBuf, reason: String },

    /// One or more reports in a run could not be written.
    #[error("{count} report(s) could not be written")]
    ReportsFailed { count: usize },

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Wrapped errors ===
    /// Wrapped anyhow error from the host side.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VerdictError {
    /// Can the user fix this without code changes?
    #[must_use]
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingExtension { .. } | Self::EmptyStamp | Self::RunFile { .. }
        )
    }

    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingExtension { .. } => {
                Some("Supply a dotted test name such as 'Checkout.xml'")
            }
            Self::EmptyStamp => Some("Pass --stamp or set VERDICT_STAMP"),
            Self::RunFile { .. } => {
                Some("Run files are JSON arrays of {test, response, result} records")
            }
            Self::CreateDir { .. } | Self::WriteFile { .. } => {
                Some("Check that the result folder is writable")
            }
            _ => None,
        }
    }
}

/// Result type using `VerdictError`.
pub type Result<T> = std::result::Result<T, VerdictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VerdictError::MissingExtension {
            name: "TestFile".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Test name 'TestFile' has no file extension to strip"
        );
    }

    #[test]
    fn test_empty_stamp_display() {
        assert_eq!(VerdictError::EmptyStamp.to_string(), "Run stamp is empty");
    }

    #[test]
    fn test_user_recoverable() {
        assert!(VerdictError::EmptyStamp.is_user_recoverable());

        let not_recoverable = VerdictError::WriteFile {
            path: PathBuf::from("results/TestFile.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!not_recoverable.is_user_recoverable());
    }

    #[test]
    fn test_suggestion() {
        let err = VerdictError::MissingExtension {
            name: "TestFile".to_string(),
        };
        assert_eq!(
            err.suggestion(),
            Some("Supply a dotted test name such as 'Checkout.xml'")
        );

        let err = VerdictError::ReportsFailed { count: 2 };
        assert_eq!(err.suggestion(), None);
    }
}
