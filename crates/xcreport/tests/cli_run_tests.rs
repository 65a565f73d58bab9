// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests for the xcreport binary
//!
//! These tests spawn the built binary, pipe an xcodebuild log into stdin,
//! and verify the JSON report written to stdout and the exit code.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

const SAMPLE_LOG: &str = "\
/Users/me/App/Sources/Model.swift:12:9: warning: variable 'cache' was never mutated
Test Suite 'AppTests.ParserTests' started at 2026-01-12 09:30:10
Test Case '-[AppTests.ParserTests testEmptyInput]' passed (0.003 seconds).
Test Case '-[AppTests.ParserTests testBadToken]' failed (0.021 seconds).
/Users/me/DerivedData/Run-App.xcresult
** BUILD FAILED **
";

/// Run the binary with the given args, feeding `input` to stdin
fn run_xcreport(args: &[&str], input: &str) -> (Value, std::process::ExitStatus) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_xcreport"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn xcreport");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for xcreport");
    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    let report = serde_json::from_str(&stdout).expect("stdout should be a JSON report");
    (report, output.status)
}

#[test]
fn test_report_written_to_stdout() {
    let (report, status) = run_xcreport(&[], SAMPLE_LOG);

    assert!(
        status.success(),
        "writing a report is a successful run even for a failed build"
    );
    assert_eq!(report["status"], "failure");
    assert_eq!(report["summary"]["errors"], 1);
    assert_eq!(report["summary"]["warnings"], 1);
    assert_eq!(report["summary"]["passedTests"], 1);
    assert_eq!(report["summary"]["failedTests"], 1);
    assert_eq!(
        report["xcresultPath"],
        "/Users/me/DerivedData/Run-App.xcresult"
    );
}

#[test]
fn test_warnings_list_omitted_by_default() {
    let (report, _) = run_xcreport(&[], SAMPLE_LOG);
    assert!(report.get("warnings").is_none());
}

#[test]
fn test_warnings_list_included_with_flag() {
    let (report, _) = run_xcreport(&["--warnings"], SAMPLE_LOG);
    let warnings = report["warnings"].as_array().expect("warnings array");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["type"], "warning");
}

#[test]
fn test_empty_input_yields_success_report() {
    let (report, status) = run_xcreport(&[], "");
    assert!(status.success());
    assert_eq!(report["status"], "success");
    assert_eq!(report["summary"]["buildTime"], "0.000");
}

#[test]
fn test_failed_only_results_in_output() {
    let (report, _) = run_xcreport(&[], SAMPLE_LOG);
    let results = report["testResults"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["status"], "failed");
    assert_eq!(results[0]["testCase"], "testBadToken");
}

#[test]
fn test_missing_input_file_exits_nonzero() {
    let output = Command::new(env!("CARGO_BIN_EXE_xcreport"))
        .arg("/nonexistent/build.log")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to run xcreport");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr was: {stderr}");
}
