// ABOUTME: Domain models for energy expenditure inputs
// ABOUTME: Closed enumerations for categorical inputs and plain records supplied by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Domain models
//!
//! All records are constructed per calculation from caller-supplied values.
//! Mass and length are always metric here; imperial input is converted at the
//! boundary before a [`Profile`] is built.

mod activity;
mod day;
mod diet;
mod profile;

pub use activity::{
    CardioActivity, CardioIntensity, HeartRateZone, LiftingIntensity, LiftingSession,
};
pub use day::DailyInputs;
pub use diet::TefLevel;
pub use profile::{Gender, Profile, UnitSystem};
