//! Run stamp generation.

use chrono::Local;

/// Format for generated run stamps: local time, file-system safe.
const STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Generate a run stamp from the current local time, e.g. `20250115-093000`.
#[must_use]
pub fn default_run_stamp() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}
