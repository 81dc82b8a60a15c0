// ABOUTME: Main library entry point for the TDEE calculator
// ABOUTME: Provides configuration, logging, input documents and the calculator service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

#![deny(unsafe_code)]

//! # TDEE Calculator
//!
//! Estimates Total Daily Energy Expenditure from a person's profile and a
//! day's activity:
//!
//! ```text
//! TDEE = (BMR + exercise + NEAT) x TEF multiplier x calibration
//! ```
//!
//! The formulas live in [`tdee_intelligence`]; the shared types and errors
//! in [`tdee_core`]. This crate adds what a caller needs around them:
//! configuration with environment overrides, structured logging, input
//! documents with default filling, and boundary validation.
//!
//! ## Example
//!
//! ```rust
//! use tdee_calculator::calculator::{TdeeCalculator, ValidationMode};
//! use tdee_calculator::config::CalculatorConfig;
//! use tdee_calculator::models::{CardioActivity, DailyInputs, Gender, HeartRateZone, Profile};
//!
//! let calculator = TdeeCalculator::new(CalculatorConfig::default());
//! let inputs = DailyInputs::new(Profile::new(Gender::Male, 30, 178.0, 82.0))
//!     .with_steps(8_000)
//!     .with_activity(CardioActivity::new(HeartRateZone::Zone3, 30.0));
//!
//! let result = calculator.calculate(inputs, ValidationMode::Strict)?;
//! assert!(result.breakdown.tdee > result.breakdown.bmr);
//! # Ok::<(), tdee_calculator::AppError>(())
//! ```

/// Calculator service with boundary validation
pub mod calculator;

/// Configuration management (defaults, limits, environment overrides)
pub mod config;

/// Caller input documents
pub mod input;

/// Structured logging setup
pub mod logging;

pub use tdee_core::models;
pub use tdee_core::{AppError, AppResult, ErrorCode};
pub use tdee_intelligence as engine;
