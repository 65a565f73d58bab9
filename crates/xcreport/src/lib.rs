// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! xcreport library
//!
//! This module exports the command configuration for use in integration
//! tests.

pub mod config;
