// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for energy expenditure formulas and unit conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Physiological coefficients used by the energy formulas
pub mod physiology;
/// Unit conversion factors (mass and length)
pub mod units;
