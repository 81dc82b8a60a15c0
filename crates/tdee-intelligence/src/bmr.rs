// ABOUTME: Basal metabolic rate estimation using Katch-McArdle or Mifflin-St Jeor
// ABOUTME: Formula choice is an explicit policy driven by body fat availability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Basal Metabolic Rate
//!
//! Two published equations are supported:
//!
//! - **Katch-McArdle**: `370 + 21.6 x lean_mass_kg`, used whenever a positive
//!   body fat percentage is known
//! - **Mifflin-St Jeor**: `10W + 6.25H - 5A + s` with `s = +5` (male) or
//!   `s = -161` (female), used otherwise
//!
//! A missing body fat value is the normal case, not a failure.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use serde::{Deserialize, Serialize};
use tdee_core::constants::physiology::{katch_mcardle, mifflin_st_jeor};
use tdee_core::models::{Gender, Profile};

/// The BMR equation chosen for a profile, together with the inputs it uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum BmrFormula {
    /// Lean-mass equation (body fat known)
    #[serde(rename = "katch_mcardle")]
    KatchMcArdle {
        /// Total body mass in kilograms
        weight_kg: f64,
        /// Body fat percentage
        body_fat_percent: f64,
    },
    /// Population equation (body fat unknown)
    MifflinStJeor {
        /// Biological sex
        gender: Gender,
        /// Age in years
        age_years: u32,
        /// Height in centimeters
        height_cm: f64,
        /// Body mass in kilograms
        weight_kg: f64,
    },
}

impl BmrFormula {
    /// Selection policy: Katch-McArdle when body fat is supplied and positive,
    /// Mifflin-St Jeor otherwise
    #[must_use]
    pub fn select(
        gender: Gender,
        age_years: u32,
        height_cm: f64,
        weight_kg: f64,
        body_fat_percent: Option<f64>,
    ) -> Self {
        match body_fat_percent {
            Some(body_fat_percent) if body_fat_percent > 0.0 => Self::KatchMcArdle {
                weight_kg,
                body_fat_percent,
            },
            _ => Self::MifflinStJeor {
                gender,
                age_years,
                height_cm,
                weight_kg,
            },
        }
    }

    /// Apply the selection policy to a profile
    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        Self::select(
            profile.gender,
            profile.age_years,
            profile.height_cm,
            profile.weight_kg,
            profile.body_fat_percent,
        )
    }

    /// Evaluate the equation (kcal/day)
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match *self {
            Self::KatchMcArdle {
                weight_kg,
                body_fat_percent,
            } => calculate_katch_mcardle(weight_kg, body_fat_percent),
            Self::MifflinStJeor {
                gender,
                age_years,
                height_cm,
                weight_kg,
            } => calculate_mifflin_st_jeor(gender, age_years, height_cm, weight_kg),
        }
    }

    /// Formula name for logging and display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KatchMcArdle { .. } => "Katch-McArdle",
            Self::MifflinStJeor { .. } => "Mifflin-St Jeor",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::KatchMcArdle { .. } => "BMR = 370 + 21.6 x Lean Mass",
            Self::MifflinStJeor {
                gender: Gender::Male,
                ..
            } => "BMR = 10W + 6.25H - 5A + 5",
            Self::MifflinStJeor {
                gender: Gender::Female,
                ..
            } => "BMR = 10W + 6.25H - 5A - 161",
        }
    }

    /// Step-by-step derivation with this profile's numbers substituted
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let bmr = self.evaluate();
        match *self {
            Self::KatchMcArdle {
                weight_kg,
                body_fat_percent,
            } => {
                let lean = lean_mass_kg(weight_kg, body_fat_percent);
                vec![
                    self.formula().to_owned(),
                    format!(
                        "Lean Mass = {weight_kg:.1} x (1 - {body_fat_percent}% / 100) = {lean:.1} kg"
                    ),
                    format!("BMR = 370 + 21.6 x {lean:.1} = {bmr:.0} kcal"),
                ]
            }
            Self::MifflinStJeor {
                gender,
                age_years,
                height_cm,
                weight_kg,
            } => {
                let sex_term = match gender {
                    Gender::Male => "+ 5",
                    Gender::Female => "- 161",
                };
                vec![
                    self.formula().to_owned(),
                    format!(
                        "BMR = 10({weight_kg:.1}) + 6.25({height_cm:.1}) - 5({age_years}) {sex_term}"
                    ),
                    format!("BMR = {bmr:.0} kcal"),
                ]
            }
        }
    }
}

/// Lean body mass from total mass and body fat percentage
#[must_use]
pub fn lean_mass_kg(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Katch-McArdle BMR: `370 + 21.6 x lean_mass_kg`
#[must_use]
pub fn calculate_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    katch_mcardle::LEAN_MASS_COEF.mul_add(
        lean_mass_kg(weight_kg, body_fat_percent),
        katch_mcardle::INTERCEPT,
    )
}

/// Mifflin-St Jeor BMR: `10W + 6.25H - 5A` plus the sex constant
#[must_use]
pub fn calculate_mifflin_st_jeor(
    gender: Gender,
    age_years: u32,
    height_cm: f64,
    weight_kg: f64,
) -> f64 {
    let weight_component = mifflin_st_jeor::WEIGHT_COEF * weight_kg;
    let height_component = mifflin_st_jeor::HEIGHT_COEF * height_cm;
    let age_component = mifflin_st_jeor::AGE_COEF * f64::from(age_years);

    let gender_constant = match gender {
        Gender::Male => mifflin_st_jeor::MALE_CONSTANT,
        Gender::Female => mifflin_st_jeor::FEMALE_CONSTANT,
    };

    weight_component + height_component - age_component + gender_constant
}

/// BMR with automatic formula selection (kcal/day)
#[must_use]
pub fn bmr(
    gender: Gender,
    age_years: u32,
    height_cm: f64,
    weight_kg: f64,
    body_fat_percent: Option<f64>,
) -> f64 {
    BmrFormula::select(gender, age_years, height_cm, weight_kg, body_fat_percent).evaluate()
}
