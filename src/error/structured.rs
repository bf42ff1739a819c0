//! Structured error output for non-interactive callers.
//!
//! Provides machine-parseable error information with:
//! - Error codes for categorization
//! - Hints for self-correction

use crate::error::VerdictError;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Machine-readable error codes.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: `SCREAMING_SNAKE_CASE` for easy parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Test name carries no extension
    MissingExtension,
    /// Run stamp was empty
    EmptyStamp,
    /// Report directory could not be created
    DirectoryCreation,
    /// Report file could not be written
    FileWrite,
    /// Report file could not be flushed
    FileFlush,
    /// Run file unreadable or malformed
    RunFileError,
    /// One or more reports failed to write
    ReportsFailed,
    /// File I/O error
    IoError,
    /// JSON serialization error
    JsonError,
    /// Unexpected internal error
    InternalError,
}

impl ErrorCode {
    /// Get the string representation for JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingExtension => "MISSING_EXTENSION",
            Self::EmptyStamp => "EMPTY_STAMP",
            Self::DirectoryCreation => "DIRECTORY_CREATION",
            Self::FileWrite => "FILE_WRITE",
            Self::FileFlush => "FILE_FLUSH",
            Self::RunFileError => "RUN_FILE_ERROR",
            Self::ReportsFailed => "REPORTS_FAILED",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Get the exit code for this error category.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::RunFileError | Self::JsonError => 2,
            _ => 1,
        }
    }
}

/// Structured error payload for the binary's error path.
#[derive(Debug, Clone)]
pub struct StructuredError {
    pub code: ErrorCode,
    pub message: String,
    pub hint: Option<&'static str>,
}

impl StructuredError {
    /// Build a structured error from a `VerdictError`.
    #[must_use]
    pub fn from_error(err: &VerdictError) -> Self {
        let code = match err {
            VerdictError::MissingExtension { .. } => ErrorCode::MissingExtension,
            VerdictError::EmptyStamp => ErrorCode::EmptyStamp,
            VerdictError::CreateDir { .. } => ErrorCode::DirectoryCreation,
            VerdictError::WriteFile { .. } => ErrorCode::FileWrite,
            VerdictError::FlushFile { .. } => ErrorCode::FileFlush,
            VerdictError::RunFile { .. } => ErrorCode::RunFileError,
            VerdictError::ReportsFailed { .. } => ErrorCode::ReportsFailed,
            VerdictError::Io(_) => ErrorCode::IoError,
            VerdictError::Json(_) => ErrorCode::JsonError,
            VerdictError::Other(_) => ErrorCode::InternalError,
        };

        Self {
            code,
            message: err.to_string(),
            hint: err.suggestion(),
        }
    }

    /// Render as a JSON value for machine consumption.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut error = json!({
            "code": self.code.as_str(),
            "message": self.message,
        });
        if let Some(hint) = self.hint {
            error["hint"] = json!(hint);
        }
        json!({ "error": error })
    }

    /// Render as a human-readable message with optional color.
    #[must_use]
    pub fn to_human(&self, use_color: bool) -> String {
        let prefix = if use_color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };

        match self.hint {
            Some(hint) => format!("{prefix} {}\n  hint: {hint}", self.message),
            None => format!("{prefix} {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        let err = VerdictError::EmptyStamp;
        let structured = StructuredError::from_error(&err);
        assert_eq!(structured.code, ErrorCode::EmptyStamp);
        assert_eq!(structured.code.as_str(), "EMPTY_STAMP");
        assert_eq!(structured.code.exit_code(), 1);
    }

    #[test]
    fn test_run_file_exit_code() {
        assert_eq!(ErrorCode::RunFileError.exit_code(), 2);
        assert_eq!(ErrorCode::FileWrite.exit_code(), 1);
    }

    #[test]
    fn test_json_shape() {
        let err = VerdictError::MissingExtension {
            name: "TestFile".to_string(),
        };
        let structured = StructuredError::from_error(&err);
        insta::assert_json_snapshot!(structured.to_json(), @r#"
        {
          "error": {
            "code": "MISSING_EXTENSION",
            "hint": "Supply a dotted test name such as 'Checkout.xml'",
            "message": "Test name 'TestFile' has no file extension to strip"
          }
        }
        "#);
    }

    #[test]
    fn test_human_output_without_color() {
        let err = VerdictError::ReportsFailed { count: 3 };
        let structured = StructuredError::from_error(&err);
        assert_eq!(
            structured.to_human(false),
            "Error: 3 report(s) could not be written"
        );
    }

    #[test]
    fn test_human_output_includes_hint() {
        let err = VerdictError::EmptyStamp;
        let structured = StructuredError::from_error(&err);
        let human = structured.to_human(false);
        assert!(human.contains("Run stamp is empty"));
        assert!(human.contains("hint: Pass --stamp or set VERDICT_STAMP"));
    }
}
