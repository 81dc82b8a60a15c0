// ABOUTME: Imperial/metric conversions for body mass and height
// ABOUTME: Exact conversions; rounding happens only in the feet/inches display split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Unit conversion helpers
//!
//! Formulas only ever see metric values. Callers entering imperial values
//! convert here, at the boundary, before building a [`Profile`].

use serde::{Deserialize, Serialize};
use tdee_core::constants::units::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB, LBS_PER_KG};
use tdee_core::models::{Gender, Profile};

/// Height split into whole feet and rounded inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeetInches {
    /// Whole feet
    pub feet: u32,
    /// Remaining inches, always in 0..=11
    pub inches: u32,
}

/// Pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

/// Inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Centimeters to inches
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Feet and inches to centimeters
#[must_use]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet.mul_add(INCHES_PER_FOOT, inches) * CM_PER_INCH
}

/// Centimeters to whole feet plus rounded inches
///
/// When the leftover inches round up to 12 the carry moves into feet, so
/// 182.8 cm is 6'0" rather than 5'12". Negative heights saturate to 0'0".
#[must_use]
pub fn cm_to_feet_inches(cm: f64) -> FeetInches {
    let total_inches = cm_to_inches(cm);
    let mut feet = (total_inches / INCHES_PER_FOOT).floor() as u32;
    let mut inches = (total_inches % INCHES_PER_FOOT).round() as u32;

    if inches >= 12 {
        feet += inches / 12;
        inches %= 12;
    }

    FeetInches { feet, inches }
}

/// Build a metric [`Profile`] from imperial form values
#[must_use]
pub fn profile_from_imperial(
    gender: Gender,
    age_years: u32,
    height_feet: f64,
    height_inches: f64,
    weight_lbs: f64,
) -> Profile {
    Profile::new(
        gender,
        age_years,
        feet_inches_to_cm(height_feet, height_inches),
        lbs_to_kg(weight_lbs),
    )
}
