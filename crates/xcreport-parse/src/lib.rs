// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xcreport-parse: xcodebuild log classification for xcreport
//!
//! This library crate turns the free-form textual output of `xcodebuild`
//! into a structured report. It recognizes clang diagnostics, XCTest and
//! Swift Testing result lines, and the `.xcresult` bundle announcement, and
//! aggregates them into a single [`Report`].
//!
//! # Example
//!
//! ```
//! use xcreport_parse::{parse_output, ReportOptions};
//!
//! let log = "\
//! /a/b.swift:15:5: error: cannot find 'x' in scope
//! ** BUILD FAILED **";
//!
//! let report = parse_output(log, ReportOptions::default());
//! assert!(!report.is_success());
//! assert_eq!(report.summary.errors, 2);
//! ```

pub mod diagnostic;
pub mod error;
pub mod parser;
pub mod report;
pub mod swift_testing;
pub mod test_result;
pub mod xctest;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::ParseError;
pub use parser::{LogParser, ReportOptions, parse_output, parse_reader};
pub use report::{BuildStatus, Report, Summary};
pub use test_result::{TestResult, TestStatus};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ParseError;
    pub use crate::parser::{LogParser, ReportOptions, parse_output, parse_reader};
    pub use crate::report::{BuildStatus, Report};
    pub use crate::test_result::{TestResult, TestStatus};
}
