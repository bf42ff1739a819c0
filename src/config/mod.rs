//! Configuration for `verdict`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides
//! 2. Environment variables (`VERDICT_RESULT_FOLDER`, `VERDICT_STAMP`)
//! 3. Defaults (record-supplied result folder, generated stamp)

use crate::error::VerdictError;
use crate::model::RunStamp;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding every record's result folder.
pub const ENV_RESULT_FOLDER: &str = "VERDICT_RESULT_FOLDER";
/// Environment variable supplying the run stamp.
pub const ENV_STAMP: &str = "VERDICT_STAMP";

/// Overrides assembled from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub out: Option<PathBuf>,
    pub stamp: Option<String>,
}

/// Resolved configuration for one render invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// When set, overrides every record's result folder.
    pub result_folder: Option<PathBuf>,
    /// When set, used verbatim instead of generating a stamp.
    pub stamp: Option<String>,
}

impl Config {
    /// Resolve configuration from CLI overrides and the environment.
    #[must_use]
    pub fn resolve(overrides: &CliOverrides) -> Self {
        let result_folder = overrides
            .out
            .clone()
            .or_else(|| non_blank_env(ENV_RESULT_FOLDER).map(PathBuf::from));
        let stamp = overrides.stamp.clone().or_else(|| non_blank_env(ENV_STAMP));

        Self {
            result_folder,
            stamp,
        }
    }

    /// The run stamp for this invocation: configured value if present,
    /// otherwise generated from the current local time.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStamp` when a configured value is blank.
    pub fn run_stamp(&self) -> Result<RunStamp, VerdictError> {
        self.stamp
            .as_ref()
            .map_or_else(|| Ok(RunStamp::now()), |value| RunStamp::new(value.clone()))
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
