//! Core data types for `verdict`.
//!
//! This module defines the shapes consumed by the report writer:
//! - `TestCase` - metadata for one executed test
//! - `Request` - the request the test issued
//! - `Response` - the response the test observed
//! - `TestResult` - the verdict with per-assertion outcomes
//! - `RunStamp` - the timestamp suffix for the report directory
//!
//! All of these are supplied by the surrounding framework; `verdict`
//! never constructs or mutates them beyond deserializing run files.

use crate::error::VerdictError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Metadata for one executed test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Test name, expected to carry a dotted extension (e.g. `Checkout.xml`).
    pub name: String,
    /// Base directory for this test's reports.
    pub result_folder: PathBuf,
    /// The request this test issued.
    pub request: Request,
}

impl TestCase {
    /// Test name with its trailing extension stripped, for use as the
    /// report file stem.
    ///
    /// # Errors
    ///
    /// Returns `MissingExtension` when the name contains no `.` -
    /// callers must supply a dotted name.
    pub fn stem(&self) -> Result<&str, VerdictError> {
        self.name.rfind('.').map_or_else(
            || {
                Err(VerdictError::MissingExtension {
                    name: self.name.clone(),
                })
            },
            |idx| Ok(&self.name[..idx]),
        )
    }
}

/// The request an executed test issued, as captured by the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Endpoint the test targeted.
    pub endpoint: String,
    /// The test's source definition/body.
    pub test_block: String,
}

/// The response an executed test observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Raw response payload.
    #[serde(default)]
    pub body: String,
    /// Response code; the wire sentinel `-1` means "absent" and is
    /// normalized to `None` on deserialization.
    #[serde(
        default,
        deserialize_with = "absent_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<i32>,
    /// Rendered response headers, when captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    /// Rendered response attachments, when captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<String>,
}

fn absent_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<i32>::deserialize(deserializer)?;
    Ok(code.filter(|&code| code != -1))
}

/// The verdict for one executed test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Whether every assertion held.
    pub passed: bool,
    /// Assertion description -> outcome description, in evaluation order.
    /// Insertion order is preserved and reproduced in report order.
    #[serde(default)]
    pub assertions: IndexMap<String, String>,
}

/// Timestamp suffix identifying one test run.
///
/// Threaded explicitly through the write operation; never read from
/// ambient shared state. Constructible from any non-blank string, so an
/// absent timestamp is unrepresentable past this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RunStamp(String);

impl RunStamp {
    /// Wrap a host-supplied stamp value.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStamp` when the value is empty or blank.
    pub fn new(value: impl Into<String>) -> Result<Self, VerdictError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(VerdictError::EmptyStamp);
        }
        Ok(Self(value))
    }

    /// Generate a stamp from the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self(crate::util::time::default_run_stamp())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RunStamp {
    type Error = VerdictError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RunStamp> for String {
    fn from(stamp: RunStamp) -> Self {
        stamp.0
    }
}
