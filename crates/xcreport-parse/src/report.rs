// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Final report types
//!
//! The [`Report`] is the immutable value derived once the input is
//! exhausted. Its serialized shape is the tool's public output contract:
//! camel-cased field names, absent (not empty) optional fields, and a
//! failed-only `testResults` list.

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::error::ParseError;
use crate::test_result::TestResult;

/// Overall build/test status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    /// No error diagnostics and no failed tests
    Success,
    /// At least one error diagnostic or failed test
    Failure,
}

/// Aggregate counts for one parse pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of error diagnostics
    pub errors: usize,
    /// Number of warning diagnostics (counted even when the list is omitted)
    pub warnings: usize,
    /// Number of passed test results
    pub passed_tests: usize,
    /// Number of failed test results
    pub failed_tests: usize,
    /// Elapsed wall time as fixed three-decimal seconds, e.g. `"12.345"`
    pub build_time: String,
}

/// The final structured report for one xcodebuild invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Derived overall status
    pub status: BuildStatus,
    /// Aggregate counts
    pub summary: Summary,
    /// All error diagnostics, in input order
    pub errors: Vec<Diagnostic>,
    /// Warning diagnostics; entirely absent unless requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Diagnostic>>,
    /// Failed test results only, in input order
    pub test_results: Vec<TestResult>,
    /// Path to the result bundle, when announced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xcresult_path: Option<String>,
}

impl Report {
    /// Check whether the run succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == BuildStatus::Success
    }

    /// Serialize the report as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ParseError> {
        serde_json::to_string_pretty(self).map_err(ParseError::from)
    }
}
