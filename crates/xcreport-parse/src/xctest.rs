// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! XCTest output matching
//!
//! Recognizes the classic XCTest line formats:
//!
//! ```text
//! Test Suite 'ParserTests' started at 2026-01-12 09:30:14.321
//! Test Case '-[MyAppTests.ParserTests testEmptyInput]' passed (0.003 seconds).
//! ```
//!
//! The test-case matcher derives the suite name from its own line and never
//! consults the ambient suite context. XCTest reports failure details on
//! separate assertion lines, so failed cases carry no message or location.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::test_result::TestResult;

/// `Test Suite '<name>' started at <timestamp>`
static SUITE_STARTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Test Suite '([^']+)' started at").expect("suite-started regex should compile")
});

/// `Test Case '-[<Suite> <test>]' passed|failed (<secs> seconds).`
static TEST_CASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Test Case '-\[(\S+)\s+(\S+)\]'\s+(passed|failed)\s+\(([\d.]+) seconds\)")
        .expect("test-case regex should compile")
});

/// Extract the suite name from a suite-started announcement
///
/// Returns `None` when the line is not a suite-started line.
#[must_use]
pub fn match_suite_started(line: &str) -> Option<String> {
    SUITE_STARTED_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Try to extract a completed XCTest case from a line
///
/// Yields exactly one result per matching line; suite and test names come
/// from the captured `-[Suite test]` selector.
#[must_use]
pub fn match_test_case(line: &str) -> Option<TestResult> {
    let caps = TEST_CASE_RE.captures(line)?;
    let suite = &caps[1];
    let test_case = &caps[2];
    // An unparseable duration degrades to an absent field
    let duration = caps[4].parse::<f64>().ok();

    Some(if &caps[3] == "passed" {
        TestResult::pass(suite, test_case, duration)
    } else {
        TestResult::fail(suite, test_case, duration)
    })
}
