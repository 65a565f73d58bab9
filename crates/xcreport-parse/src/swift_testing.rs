// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Swift Testing output matching
//!
//! Recognizes the swift-testing line formats:
//!
//! ```text
//! ✘ Test "adds numbers" recorded an issue at MathTests.swift:41:9: Expectation failed
//! ✔ Test "adds numbers" passed after 0.001 seconds.
//! ✘ Test addNumbers(a:b:) with 19 test cases failed after 0.123 seconds with 2 issues.
//! ```
//!
//! Three matchers cooperate, tried strictly in the order issue, success,
//! failure. Parameterized tests report one aggregate line carrying a
//! `with N test cases` count; successes expand to N results with indexed
//! names, while aggregate *failure* rollups are suppressed because each
//! constituent failure is already reported on its own `recorded an issue`
//! line. Suppression is a terminal decision, not a fall-through.
//!
//! Unlike XCTest, these lines carry no suite name; callers supply the
//! ambient suite context, falling back to [`DEFAULT_SUITE`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::test_result::{TestResult, TestStatus};

/// Suite label used when no suite context has been announced
pub const DEFAULT_SUITE: &str = "Swift Testing";

const ISSUE_MARKER: &str = "recorded an issue";
const PASSED_MARKER: &str = "passed after";
const FAILED_MARKER: &str = "failed after";

/// `Test "<name>" recorded an issue at <file>:<line>[:<col>]: <message>`
static ISSUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Test "([^"]+)" recorded an issue at (.+?):(\d+)(?::\d+)?:\s*(.*)$"#)
        .expect("issue regex should compile")
});

/// `Test <name> [with N test cases] passed after <secs> seconds`
///
/// The name is either quoted display text or a bare function reference with
/// call parentheses, e.g. `addNumbers(a:b:)`.
static PASSED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"Test\s+(?:"([^"]+)"|([A-Za-z_][A-Za-z0-9_]*\([^)]*\)))(?:\s+with\s+(\d+)\s+test cases)?\s+passed after\s+([\d.]+)\s+seconds"#,
    )
    .expect("passed regex should compile")
});

/// Same shape as the success pattern with the `failed after` literal
static FAILED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"Test\s+(?:"([^"]+)"|([A-Za-z_][A-Za-z0-9_]*\([^)]*\)))(?:\s+with\s+(\d+)\s+test cases)?\s+failed after\s+([\d.]+)\s+seconds"#,
    )
    .expect("failed regex should compile")
});

/// Try to extract a recorded issue from a line
///
/// Each recorded issue is one concrete failing invocation, so this always
/// yields exactly one failed result carrying file, line and message --
/// whether or not the test is parameterized.
#[must_use]
pub fn match_issue(line: &str, suite: &str) -> Option<TestResult> {
    if !line.contains(ISSUE_MARKER) {
        return None;
    }
    let caps = ISSUE_RE.captures(line)?;

    Some(TestResult {
        failure_message: Some(caps[4].to_string()),
        file: Some(caps[2].to_string()),
        line: caps[3].parse().ok(),
        ..TestResult::fail(suite, &caps[1], None)
    })
}

/// Try to extract a success summary from a line
///
/// A parameterized summary with `N` test cases expands to `N` passed
/// results sharing the duration, named `<base> [case 1]` through
/// `<base> [case N]`. A plain summary yields one result with the
/// unsuffixed name.
#[must_use]
pub fn match_passed(line: &str, suite: &str) -> Option<Vec<TestResult>> {
    if !line.contains(PASSED_MARKER) {
        return None;
    }
    let caps = PASSED_RE.captures(line)?;
    let (name, count, duration) = summary_parts(&caps);
    Some(expand(suite, &name, count, duration, TestStatus::Passed))
}

/// Try to extract a failure summary from a line
///
/// Aggregate rollups of parameterized failures (`... with N test cases
/// failed after ... with M issues`) yield an explicit empty result: their
/// constituent failures are reported individually on `recorded an issue`
/// lines and must not be double-counted. The rollup is detected by the same
/// surface substring check the upstream formats are known to satisfy.
#[must_use]
pub fn match_failed(line: &str, suite: &str) -> Option<Vec<TestResult>> {
    if !line.contains(FAILED_MARKER) {
        return None;
    }
    if line.contains("with") && line.contains("test cases") && line.contains("issues") {
        return Some(Vec::new());
    }
    let caps = FAILED_RE.captures(line)?;
    let (name, count, duration) = summary_parts(&caps);
    Some(expand(suite, &name, count, duration, TestStatus::Failed))
}

/// Pull name, case count and duration out of a summary-line capture
fn summary_parts(caps: &regex::Captures<'_>) -> (String, usize, Option<f64>) {
    let name = caps
        .get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    // An absent or unparseable count means a single, non-parameterized case
    let count = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1);
    let duration = caps.get(4).and_then(|m| m.as_str().parse().ok());
    (name, count, duration)
}

/// Expand a summary into per-case results
fn expand(
    suite: &str,
    name: &str,
    count: usize,
    duration: Option<f64>,
    status: TestStatus,
) -> Vec<TestResult> {
    let make = |test_case: String| match status {
        TestStatus::Passed => TestResult::pass(suite, test_case, duration),
        TestStatus::Failed => TestResult::fail(suite, test_case, duration),
    };

    if count == 1 {
        vec![make(name.to_string())]
    } else {
        (1..=count)
            .map(|case| make(format!("{name} [case {case}]")))
            .collect()
    }
}
