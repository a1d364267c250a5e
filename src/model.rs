// src/model.rs
//! The JUnit report tree.
//!
//! One fixed schema: `testsuites` → `testsuite` → `testcase` → optional
//! `failure`. Numeric attributes are true numerics; missing attributes
//! default to zero/empty (some harnesses omit suite names entirely, which
//! is why [`TestSuites::set_suite_name`] exists).

use crate::error::{Result, TidyError};
use serde::{Deserialize, Serialize};

/// Root collection of an aggregated report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSuites {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@failures", default)]
    pub failures: u32,
    #[serde(rename = "@time", default)]
    pub time: f64,
    #[serde(rename = "@tests", default)]
    pub tests: u32,
    #[serde(rename = "testsuite", default)]
    pub suites: Vec<TestSuite>,
}

/// A named group of test case results, roughly one per test file run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    #[serde(rename = "@tests", default)]
    pub tests: u32,
    #[serde(rename = "@failures", default)]
    pub failures: u32,
    #[serde(rename = "@time", default)]
    pub time: f64,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "testcase", default)]
    pub cases: Vec<TestCase>,
}

/// A single test's outcome record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "@classname", default)]
    pub classname: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@time", default)]
    pub time: f64,
    #[serde(rename = "@assertions", default, skip_serializing_if = "Option::is_none")]
    pub assertions: Option<u32>,
    #[serde(rename = "failure", default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

/// Present only when a case did not pass. The body text is preserved
/// verbatim modulo the codec's own escaping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    #[serde(rename = "@message", default)]
    pub message: String,
    #[serde(rename = "@type", default)]
    pub failure_type: String,
    #[serde(rename = "$text", default)]
    pub content: String,
}

impl TestSuites {
    /// Appends every suite of `incoming` to this aggregate, preserving
    /// input order. No deduplication, no count recompute; counts are
    /// fixed up by [`crate::sanitize::sanitize`] once merging is done.
    pub fn aggregate(&mut self, incoming: TestSuites) {
        self.suites.extend(incoming.suites);
    }

    /// Renames the sole suite and namespaces every contained case name
    /// under it (`<new_name>/<original>`). Intended to run before
    /// sanitization, which strips the slash from case names.
    ///
    /// # Errors
    /// Returns `InvalidState` when the aggregate holds zero suites or
    /// more than one; the tree is left untouched in both cases.
    pub fn set_suite_name(&mut self, new_name: &str) -> Result<()> {
        let suite = match self.suites.as_mut_slice() {
            [] => {
                return Err(TidyError::InvalidState(
                    "no test suites found".to_string(),
                ))
            }
            [one] => one,
            _ => {
                return Err(TidyError::InvalidState(
                    "more than one suite found, ambiguous: cannot rename".to_string(),
                ))
            }
        };

        suite.name = new_name.to_string();
        for case in &mut suite.cases {
            case.name = format!("{new_name}/{}", case.name);
        }
        Ok(())
    }

    /// Total number of cases across all suites.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }
}

impl TestCase {
    /// Returns true if the case carries no failure.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.failure.is_none()
    }
}
