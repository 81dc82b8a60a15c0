// ABOUTME: Core types and constants for the TDEE calculation engine
// ABOUTME: Foundation crate with error handling, domain enumerations, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

#![deny(unsafe_code)]

//! # TDEE Core
//!
//! Foundation crate providing shared types and constants for the energy
//! expenditure engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Physiological coefficients and unit conversion factors
//! - **models**: Closed enumerations and caller-side input records

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological coefficients and unit conversion factors organized by domain
pub mod constants;

/// Domain enumerations and input records (profile, activities, diet)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
