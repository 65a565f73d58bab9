// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for xcreport-parse
//!
//! Pattern non-matches are not errors; a line that matches nothing simply
//! contributes no information. The only failure modes are reading the input
//! and serializing the final report.

use thiserror::Error;

/// Errors that can occur while producing a report
#[derive(Debug, Error)]
pub enum ParseError {
    /// Error reading build output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing the report
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
