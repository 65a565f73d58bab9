// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification and aggregation
//!
//! [`LogParser`] consumes one xcodebuild output line at a time and
//! accumulates diagnostics, test results, the ambient suite context and the
//! result-bundle path. A parser instance owns the state of exactly one pass;
//! [`LogParser::finish`] consumes it, so state can never leak between runs.
//!
//! # Example
//!
//! ```
//! use xcreport_parse::parser::{parse_output, ReportOptions};
//!
//! let log = "Test Case '-[AppTests.MathTests testAdd]' passed (0.003 seconds).\n\
//!            ** BUILD SUCCEEDED **";
//! let report = parse_output(log, ReportOptions::default());
//! assert!(report.is_success());
//! assert_eq!(report.summary.passed_tests, 1);
//! ```

use std::io::BufRead;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::diagnostic::{self, Diagnostic, DiagnosticKind};
use crate::error::ParseError;
use crate::report::{BuildStatus, Report, Summary};
use crate::swift_testing;
use crate::test_result::TestResult;
use crate::xctest;

/// Suffix of the result-bundle path announced by xcodebuild
const XCRESULT_SUFFIX: &str = ".xcresult";

/// Lines that mark the end of a build or test session.
///
/// Each occurrence re-captures the completion time, so the last one governs.
const COMPLETION_MARKERS: &[&str] = &[
    "Test session results",
    "** BUILD SUCCEEDED **",
    "** BUILD FAILED **",
];

/// Options controlling report derivation
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Include the detailed warnings list in the report.
    ///
    /// Warnings are always counted in the summary; this only controls
    /// whether the per-warning detail list is present.
    pub include_warnings: bool,
}

/// Streaming classifier for xcodebuild output
///
/// Accumulates state line by line; call [`LogParser::finish`] once the input
/// is exhausted to derive the final [`Report`].
#[derive(Debug, Default)]
pub struct LogParser {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    test_results: Vec<TestResult>,
    current_suite: Option<String>,
    xcresult_path: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl LogParser {
    /// Create a parser with empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a single output line and fold it into the running state
    ///
    /// The checks outside the test-result family are independent; a single
    /// line may, for example, be both a diagnostic and a completion marker.
    /// Within the test-result family the first matcher to produce a result
    /// (including an explicit empty suppression result) is terminal.
    pub fn process_line(&mut self, line: &str) {
        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }

        if let Some(diag) = diagnostic::match_diagnostic(line) {
            debug!(kind = ?diag.kind, message = %diag.message, "matched diagnostic");
            match diag.kind {
                DiagnosticKind::Error => self.errors.push(diag),
                DiagnosticKind::Warning => self.warnings.push(diag),
            }
        }

        if let Some(suite) = xctest::match_suite_started(line) {
            debug!(suite = %suite, "entering test suite");
            self.current_suite = Some(suite);
        }

        if let Some(results) = self.match_test_results(line) {
            self.test_results.extend(results);
        }

        if let Some(path) = match_artifact_path(line) {
            debug!(path = %path, "found result bundle path");
            self.xcresult_path = Some(path);
        }

        if is_completion_marker(line) {
            self.finished_at = Some(Utc::now());
        }
    }

    /// Try the test-result matchers in priority order
    fn match_test_results(&self, line: &str) -> Option<Vec<TestResult>> {
        let suite = self
            .current_suite
            .as_deref()
            .unwrap_or(swift_testing::DEFAULT_SUITE);

        if let Some(result) = swift_testing::match_issue(line, suite) {
            return Some(vec![result]);
        }
        if let Some(results) = swift_testing::match_passed(line, suite) {
            return Some(results);
        }
        if let Some(results) = swift_testing::match_failed(line, suite) {
            return Some(results);
        }
        xctest::match_test_case(line).map(|result| vec![result])
    }

    /// Consume the accumulated state and derive the final report
    ///
    /// When no completion marker was seen, the completion time defaults to
    /// the moment of this call; when no line was ever observed, the build
    /// time is reported as `"0.000"`.
    #[must_use]
    pub fn finish(self, options: ReportOptions) -> Report {
        let finished_at = self.finished_at.unwrap_or_else(Utc::now);
        let build_time = match self.started_at {
            Some(started_at) => {
                let secs = (finished_at - started_at).num_milliseconds() as f64 / 1000.0;
                format!("{secs:.3}")
            }
            None => "0.000".to_string(),
        };

        let passed_tests = self.test_results.iter().filter(|r| r.passed()).count();
        let failed_tests = self.test_results.iter().filter(|r| r.failed()).count();

        let status = if self.errors.is_empty() && failed_tests == 0 {
            BuildStatus::Success
        } else {
            BuildStatus::Failure
        };

        debug!(
            errors = self.errors.len(),
            warnings = self.warnings.len(),
            passed_tests,
            failed_tests,
            "derived report"
        );

        Report {
            status,
            summary: Summary {
                errors: self.errors.len(),
                warnings: self.warnings.len(),
                passed_tests,
                failed_tests,
                build_time,
            },
            errors: self.errors,
            warnings: options.include_warnings.then_some(self.warnings),
            // Passed results are counted above but never surfaced individually
            test_results: self.test_results.into_iter().filter(|r| r.failed()).collect(),
            xcresult_path: self.xcresult_path,
        }
    }
}

/// Try to extract the result-bundle path from a line
///
/// The trimmed line must both start at the filesystem root and end with the
/// bundle suffix. The caller keeps the last hit across the whole input.
#[must_use]
pub fn match_artifact_path(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (trimmed.starts_with('/') && trimmed.ends_with(XCRESULT_SUFFIX)).then(|| trimmed.to_string())
}

/// Check whether a line marks the end of a build or test session
#[must_use]
pub fn is_completion_marker(line: &str) -> bool {
    COMPLETION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Parse a complete xcodebuild log held in memory
#[must_use]
pub fn parse_output(output: &str, options: ReportOptions) -> Report {
    let mut parser = LogParser::new();
    for line in output.lines() {
        parser.process_line(line);
    }
    parser.finish(options)
}

/// Parse an xcodebuild log from a reader, line by line
///
/// # Errors
///
/// Returns `ParseError::Io` if reading a line fails.
pub fn parse_reader<R: BufRead>(reader: R, options: ReportOptions) -> Result<Report, ParseError> {
    let mut parser = LogParser::new();
    for line in reader.lines() {
        parser.process_line(&line?);
    }
    Ok(parser.finish(options))
}
