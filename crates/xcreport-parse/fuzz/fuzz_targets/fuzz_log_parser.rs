// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the log parser
//!
//! This fuzzes `LogParser`, which classifies xcodebuild output
//! line-by-line incrementally.

#![no_main]

use libfuzzer_sys::fuzz_target;

use xcreport_parse::{LogParser, ReportOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parser = LogParser::new();

        // Classification should never panic on any line
        for line in input.lines() {
            parser.process_line(line);
        }

        // Report derivation and serialization should never panic
        let report = parser.finish(ReportOptions {
            include_warnings: true,
        });
        let _ = report.to_json_pretty();
    }
});
