// ABOUTME: Energy expenditure engine composed of independent pure formula modules
// ABOUTME: BMR selection, heart-rate zones, lifting, NEAT, TEF, TDEE composition and validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

#![deny(unsafe_code)]

//! # TDEE Intelligence
//!
//! Stateless calculation engine. Every function is referentially transparent
//! and total over its numeric domain: out-of-range input yields a number
//! (possibly non-physiological), never an error. Range checks live in
//! [`validation`] and are applied by callers at the input boundary.
//!
//! Composition order, leaves first:
//!
//! 1. [`units`] - imperial/metric conversion
//! 2. [`bmr`] - Katch-McArdle or Mifflin-St Jeor, chosen by data availability
//! 3. [`heart_rate`] - zone + duration to energy via estimated average HR
//! 4. [`lifting`] - MET-based resistance training cost with recovery overhead
//! 5. [`neat`] - net step count to incidental movement energy
//! 6. [`tef`] - diet category to thermic multiplier
//! 7. [`composer`] - sums the components and applies TEF and calibration
//! 8. [`validation`] - advisory range predicates for every external input

/// Unit conversion helpers (mass, length, feet/inches)
pub mod units;

/// Basal metabolic rate formulas and selection policy
pub mod bmr;

/// Heart-rate zone energy estimation
pub mod heart_rate;

/// Resistance training energy estimation
pub mod lifting;

/// Non-exercise activity thermogenesis from steps
pub mod neat;

/// Thermic effect of food multipliers
pub mod tef;

/// TDEE composition and daily energy breakdown
pub mod composer;

/// Input range predicates and whole-day validation reports
pub mod validation;

pub use bmr::{bmr, BmrFormula};
pub use composer::{calculate_daily_energy, tdee, ComponentShares, EnergyBreakdown};
pub use heart_rate::{average_heart_rate, calories_from_heart_rate, zone_calories};
pub use lifting::lifting_calories;
pub use neat::{estimate_cardio_steps, neat_from_steps};
pub use tef::tef_multiplier;
pub use validation::{validate_inputs, ValidationLimits, ValidationReport};
