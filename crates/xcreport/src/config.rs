// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the xcreport command
//!
//! This module provides the command-line surface: the report-shaping
//! `--warnings` flag, logging verbosity, and the optional input path.

use std::path::PathBuf;

use clap::Parser;

/// xcreport - turn xcodebuild output into a structured JSON report
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "xcreport")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to an xcodebuild log file
    ///
    /// When omitted, the log is read from stdin, so xcodebuild output can
    /// be piped straight in:
    ///
    ///   xcodebuild test -scheme App 2>&1 | xcreport
    pub input: Option<PathBuf>,

    /// Include the detailed warnings list in the report
    ///
    /// Warnings are always counted in the summary; this flag additionally
    /// emits the per-warning detail array.
    #[arg(short, long, default_value = "false")]
    pub warnings: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never interfere with the JSON
    /// report on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an input path is specified but does not exist
    /// or is not a file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}
