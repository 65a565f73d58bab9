// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xcreport: turn xcodebuild output into a structured JSON report
//!
//! This binary crate reads one xcodebuild invocation's combined output
//! (from stdin or a file), classifies it line by line, and writes a single
//! JSON report to stdout. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use xcreport::config::Config;
use xcreport_parse::{Report, ReportOptions, parse_reader};

fn main() {
    let config = Config::parse();

    // Logs go to stderr so stdout stays clean for the JSON report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&config) {
        eprintln!("xcreport: {err:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    let options = ReportOptions {
        include_warnings: config.warnings,
    };

    let report = match &config.input {
        Some(path) => {
            info!(path = %path.display(), "reading build log");
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            parse_reader(BufReader::new(file), options)
                .context("Failed to read build output")?
        }
        None => parse_reader(io::stdin().lock(), options).context("Failed to read stdin")?,
    };

    info!(
        errors = report.summary.errors,
        warnings = report.summary.warnings,
        passed_tests = report.summary.passed_tests,
        failed_tests = report.summary.failed_tests,
        "parsed build output"
    );

    write_report(&report).context("Failed to serialize report to JSON")?;

    Ok(())
}

fn write_report(report: &Report) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, report)?;
    writeln!(handle)?;
    Ok(())
}
