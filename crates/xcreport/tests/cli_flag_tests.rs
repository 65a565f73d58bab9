// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for the xcreport flags
//!
//! These tests verify flag parsing and the logging level configuration,
//! including flag interactions.

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use xcreport::config::Config;

// ============================================================================
// --warnings flag tests
// ============================================================================

#[test]
fn test_warnings_short_flag_w() {
    let config = Config::try_parse_from(["xcreport", "-w"]).expect("parse should succeed");
    assert!(config.warnings);
}

#[test]
fn test_warnings_long_flag() {
    let config = Config::try_parse_from(["xcreport", "--warnings"]).expect("parse should succeed");
    assert!(config.warnings);
}

#[test]
fn test_warnings_off_by_default() {
    let config = Config::try_parse_from(["xcreport"]).expect("parse should succeed");
    assert!(!config.warnings);
}

#[test]
fn test_warnings_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    let result = Config::try_parse_from(["xcreport", "--warnings=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

// ============================================================================
// Input argument tests
// ============================================================================

#[test]
fn test_input_defaults_to_none() {
    let config = Config::try_parse_from(["xcreport"]).expect("parse should succeed");
    assert!(config.input.is_none());
}

#[test]
fn test_input_positional() {
    let config =
        Config::try_parse_from(["xcreport", "/tmp/build.log"]).expect("parse should succeed");
    assert_eq!(config.input, Some(PathBuf::from("/tmp/build.log")));
}

#[test]
fn test_input_combined_with_flags() {
    let config = Config::try_parse_from(["xcreport", "--warnings", "-v", "/tmp/build.log"])
        .expect("parse should succeed");
    assert!(config.warnings);
    assert!(config.verbose);
    assert_eq!(config.input, Some(PathBuf::from("/tmp/build.log")));
}

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["xcreport", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(!config.quiet);
}

#[test]
fn test_verbose_sets_debug_log_level() {
    let config = Config::try_parse_from(["xcreport", "--verbose"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_short_flag_q() {
    let config = Config::try_parse_from(["xcreport", "-q"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_default_log_level_is_info() {
    let config = Config::try_parse_from(["xcreport"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::INFO);
}

#[test]
fn test_verbose_wins_over_quiet() {
    let config = Config::try_parse_from(["xcreport", "-v", "-q"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_unknown_flag_is_rejected() {
    let result = Config::try_parse_from(["xcreport", "--unknown-flag"]);
    assert!(result.is_err());
}
