// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test result types

use serde::{Deserialize, Serialize};

/// One concrete test invocation's result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Suite the test belongs to
    pub suite: String,
    /// Test case name; parameterized expansions carry a ` [case N]` suffix
    pub test_case: String,
    /// Test outcome
    pub status: TestStatus,
    /// Duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Failure message (failed results only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
    /// Source file of the recorded failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Source line of the recorded failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// Possible test outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Test passed
    Passed,
    /// Test failed
    Failed,
}

impl TestResult {
    /// Create a pass result
    #[must_use]
    pub fn pass(
        suite: impl Into<String>,
        test_case: impl Into<String>,
        duration: Option<f64>,
    ) -> Self {
        Self {
            suite: suite.into(),
            test_case: test_case.into(),
            status: TestStatus::Passed,
            duration,
            failure_message: None,
            file: None,
            line: None,
        }
    }

    /// Create a fail result
    #[must_use]
    pub fn fail(
        suite: impl Into<String>,
        test_case: impl Into<String>,
        duration: Option<f64>,
    ) -> Self {
        Self {
            suite: suite.into(),
            test_case: test_case.into(),
            status: TestStatus::Failed,
            duration,
            failure_message: None,
            file: None,
            line: None,
        }
    }

    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status == TestStatus::Failed
    }
}
