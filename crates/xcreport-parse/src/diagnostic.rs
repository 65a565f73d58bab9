// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Compiler and tool diagnostic matching
//!
//! Recognizes clang-style `file:line:col: error: message` diagnostics as well
//! as location-less tool failures (the build-failed banner, linker and
//! compiler-driver errors).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Clang-style diagnostic: `path:line:col: error|warning: message`
///
/// The path capture is non-greedy so the first `:digits:digits:` group after
/// it is taken as the location.
static DIAGNOSTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?):(\d+):(\d+):\s+(error|warning):\s+(.*)$")
        .expect("diagnostic regex should compile")
});

/// The overall build-failed banner emitted by xcodebuild
pub(crate) const BUILD_FAILED_BANNER: &str = "** BUILD FAILED **";

/// Tool prefixes that indicate a fatal, location-less error.
///
/// Matched case-insensitively against the start of the trimmed line.
const TOOL_ERROR_PREFIXES: &[&str] = &["ld:", "clang:", "fatal error:"];

/// A single compiler or tool message extracted from build output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Source file the message points at, if the line carried a location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Line number within the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Column number within the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    /// Message text
    pub message: String,
    /// Whether this is an error or a warning
    #[serde(rename = "type")]
    pub kind: DiagnosticKind,
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// Compilation or tool error
    Error,
    /// Compiler warning
    Warning,
}

impl Diagnostic {
    /// Create an error diagnostic with no source location
    #[must_use]
    pub fn bare_error(message: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            column: None,
            message: message.into(),
            kind: DiagnosticKind::Error,
        }
    }

    /// Check whether this diagnostic is an error
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == DiagnosticKind::Error
    }
}

/// Try to extract a diagnostic from a single output line
///
/// The located `file:line:col:` form is tried first. If it does not match,
/// the trimmed line is checked against the build-failed banner and the known
/// tool-error prefixes, which yield location-less error diagnostics carrying
/// the whole trimmed line as the message.
///
/// Returns `None` when the line carries no diagnostic.
#[must_use]
pub fn match_diagnostic(line: &str) -> Option<Diagnostic> {
    if let Some(caps) = DIAGNOSTIC_RE.captures(line) {
        let kind = if &caps[4] == "error" {
            DiagnosticKind::Error
        } else {
            DiagnosticKind::Warning
        };
        return Some(Diagnostic {
            // Indented diagnostics would otherwise carry the indentation in
            // the path capture
            file: Some(caps[1].trim().to_string()),
            // A failed numeric conversion degrades to an absent field
            line: caps[2].parse().ok(),
            column: caps[3].parse().ok(),
            message: caps[5].to_string(),
            kind,
        });
    }

    let trimmed = line.trim();
    if trimmed == BUILD_FAILED_BANNER {
        return Some(Diagnostic::bare_error(trimmed));
    }

    let lowered = trimmed.to_lowercase();
    if TOOL_ERROR_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        return Some(Diagnostic::bare_error(trimmed));
    }

    None
}
