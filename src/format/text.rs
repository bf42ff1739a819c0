//! Plain-text report body rendering.
//!
//! Produces the report for one completed test:
//!
//! ```text
//! Results for test: <name> --------- <status>
//!
//! Endpoint: <endpoint>
//!
//! Test: <test block>
//!
//! Assertion Results: <one line per assertion>
//!
//! Response: <body>
//! ```
//!
//! followed, only when present, by `Response Code`, `Response Headers`
//! and `Response Attachments` lines in that order.

use crate::model::{Response, TestCase, TestResult};
use indexmap::IndexMap;
use std::fmt::Write as _;

/// Line separator used in report bodies.
pub const LINE_SEP: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Status label for the report header line.
#[must_use]
pub const fn status_label(passed: bool) -> &'static str {
    if passed {
        "Success"
    } else {
        "Failed (See assertion results below)"
    }
}

/// File name suffix distinguishing failed reports.
#[must_use]
pub const fn file_suffix(passed: bool) -> &'static str {
    if passed { "" } else { "-FAILED" }
}

/// Render the assertion-results section.
///
/// One line per entry in insertion order, each preceded by a line
/// separator. An empty mapping yields an empty section.
#[must_use]
pub fn assertion_section(assertions: &IndexMap<String, String>) -> String {
    let mut section = String::new();
    for (assertion, outcome) in assertions {
        section.push_str(LINE_SEP);
        section.push_str("Assertion: ");
        section.push_str(assertion);
        section.push_str(" Result: ");
        section.push_str(outcome);
    }
    section
}

/// Render the full report body for one completed test.
///
/// Deterministic and side-effect-free. The header carries the full
/// dotted test name; extension stripping applies to the file name only.
#[must_use]
pub fn render_report(test: &TestCase, response: &Response, result: &TestResult) -> String {
    let mut body = format!(
        "Results for test: {name} --------- {status}{sep}{sep}\
         Endpoint: {endpoint}{sep}{sep}\
         Test: {block}{sep}{sep}\
         Assertion Results: {assertions}{sep}{sep}\
         Response: {response}",
        name = test.name,
        status = status_label(result.passed),
        endpoint = test.request.endpoint,
        block = test.request.test_block,
        assertions = assertion_section(&result.assertions),
        response = response.body,
        sep = LINE_SEP,
    );

    if let Some(code) = response.code {
        let _ = write!(body, "{LINE_SEP}Response Code: {code}");
    }
    if let Some(headers) = &response.headers {
        let _ = write!(body, "{LINE_SEP}Response Headers: {headers}");
    }
    if let Some(attachments) = &response.attachments {
        let _ = write!(body, "{LINE_SEP}Response Attachments: {attachments}");
    }

    body
}
