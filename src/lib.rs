//! `verdict` — plain-text report writing for completed test runs.
//!
//! Given a completed test's data, the response it produced, and the
//! pass/fail verdict with per-assertion outcomes, `verdict` renders a
//! human-readable report and persists it under a timestamped directory:
//!
//! ```text
//! <result_folder>_<stamp>/
//!   <test_stem>.txt          (test passed)
//!   <test_stem>-FAILED.txt   (test failed)
//! ```
//!
//! The library is organized as:
//! - [`model`] - the consumed data shapes (`TestCase`, `Response`,
//!   `TestResult`, `RunStamp`)
//! - [`format`] - pure report-body rendering
//! - [`writer`] - destination resolution and file persistence
//! - [`cli`] - the `vd` binary driving the writer over a JSON run file

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod util;
pub mod writer;

pub use error::{Result, StructuredError, VerdictError};
pub use model::{Request, Response, RunStamp, TestCase, TestResult};
pub use writer::{ResultWriter, TextFileWriter, WriteOutcome};
