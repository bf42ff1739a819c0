//! Destination resolution and report persistence.
//!
//! The writer places one report per completed test under a timestamped
//! directory:
//!
//! ```text
//! <result_folder>_<stamp>/<stem><suffix>.txt
//! ```
//!
//! Writes are best-effort: the operation never panics and never raises.
//! Every attempt returns a [`WriteOutcome`] carrying the written path
//! and/or the error, and the caller decides whether to log.

use crate::error::VerdictError;
use crate::format::{file_suffix, render_report};
use crate::model::{Response, RunStamp, TestCase, TestResult};
use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Capability contract for result writers.
///
/// The host framework holds an implementation injected at startup and
/// invokes it once per completed test, sequentially.
pub trait ResultWriter {
    /// Render and persist one test's report.
    fn write_results(
        &self,
        test: &TestCase,
        response: &Response,
        result: &TestResult,
        stamp: &RunStamp,
    ) -> WriteOutcome;
}

/// Outcome of one write attempt.
///
/// `path` and `error` may coexist: a flush failure after a successful
/// write reports the error without undoing the outcome already
/// determined.
#[derive(Debug)]
pub struct WriteOutcome {
    /// Path of the written report, when the write landed.
    pub path: Option<PathBuf>,
    /// Error encountered, if any.
    pub error: Option<VerdictError>,
}

impl WriteOutcome {
    /// True when the report was written and fully flushed.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.path.is_some() && self.error.is_none()
    }

    fn written(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            error: None,
        }
    }

    fn failure(error: VerdictError) -> Self {
        Self {
            path: None,
            error: Some(error),
        }
    }
}

/// Writes one plain-text report file per completed test.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileWriter;

/// Report directory for one run: the result folder with `_<stamp>`
/// appended to its final component.
fn report_dir(result_folder: &Path, stamp: &RunStamp) -> PathBuf {
    let mut dir = result_folder.as_os_str().to_os_string();
    dir.push("_");
    dir.push(stamp.as_str());
    PathBuf::from(dir)
}

impl ResultWriter for TextFileWriter {
    fn write_results(
        &self,
        test: &TestCase,
        response: &Response,
        result: &TestResult,
        stamp: &RunStamp,
    ) -> WriteOutcome {
        debug!(test = %test.name, passed = result.passed, "writing text report");

        let stem = match test.stem() {
            Ok(stem) => stem,
            Err(err) => return WriteOutcome::failure(err),
        };

        let dir = report_dir(&test.result_folder, stamp);
        if let Err(source) = fs::create_dir_all(&dir) {
            return WriteOutcome::failure(VerdictError::CreateDir { path: dir, source });
        }

        let path = dir.join(format!("{stem}{}.txt", file_suffix(result.passed)));
        let body = render_report(test, response, result);

        let mut file = match File::create(&path) {
            Ok(file) => file,
            Err(source) => return WriteOutcome::failure(VerdictError::WriteFile { path, source }),
        };
        if let Err(source) = file.write_all(body.as_bytes()) {
            return WriteOutcome::failure(VerdictError::WriteFile { path, source });
        }

        // The write landed; a failed flush is reported alongside the path.
        match file.sync_all() {
            Ok(()) => WriteOutcome::written(path),
            Err(source) => WriteOutcome {
                path: Some(path.clone()),
                error: Some(VerdictError::FlushFile { path, source }),
            },
        }
    }
}
