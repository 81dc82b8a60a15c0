// ABOUTME: Unit conversion factors between imperial and metric measurements
// ABOUTME: Exact factors; rounding is a display concern and never happens here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592;

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.204_62;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimeters per kilometer
pub const CM_PER_KM: f64 = 100_000.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;
