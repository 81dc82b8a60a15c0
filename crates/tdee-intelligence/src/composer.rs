// ABOUTME: TDEE composition from BMR, exercise, NEAT, TEF and personal calibration
// ABOUTME: Recomputes the full daily breakdown from one set of inputs on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! TDEE Composer
//!
//! ```text
//! base_tdee  = bmr + exercise + neat
//! final_tdee = base_tdee x tef_multiplier x calibration_factor
//! ```
//!
//! where `exercise` is the sum of zone-activity energies plus lifting energy.
//! Negative component values are carried through unchanged. There is no
//! incremental recomputation: the whole pipeline runs on every input change.

use crate::bmr::BmrFormula;
use crate::heart_rate::zone_calories;
use crate::lifting::lifting_calories;
use crate::neat::{neat_from_steps, net_steps, total_cardio_steps};
use crate::tef::tef_multiplier;
use serde::{Deserialize, Serialize};
use tdee_core::models::{DailyInputs, TefLevel};
use tracing::debug;

/// Final TDEE (kcal/day)
///
/// # Arguments
/// * `bmr_kcal` - Basal metabolic rate
/// * `exercise_kcal` - Zone activities plus lifting
/// * `neat_kcal` - Incidental movement
/// * `tef_level` - Diet category selecting the thermic multiplier
/// * `calibration_factor` - Personal adjustment, nominally 0.85-1.15
#[must_use]
pub fn tdee(
    bmr_kcal: f64,
    exercise_kcal: f64,
    neat_kcal: f64,
    tef_level: TefLevel,
    calibration_factor: f64,
) -> f64 {
    let base_tdee = bmr_kcal + exercise_kcal + neat_kcal;
    base_tdee * tef_multiplier(tef_level) * calibration_factor
}

/// Percentage of the pre-TEF total contributed by each component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentShares {
    /// BMR share (%)
    pub bmr_percent: f64,
    /// Exercise share (%)
    pub exercise_percent: f64,
    /// NEAT share (%)
    pub neat_percent: f64,
}

/// Every intermediate value of a daily calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// BMR equation selected, with its inputs
    pub bmr_formula: BmrFormula,
    /// Basal metabolic rate (kcal)
    pub bmr: f64,
    /// Sum of heart-rate zone activities (kcal)
    pub zone_exercise_kcal: f64,
    /// Lifting including recovery overhead (kcal)
    pub lifting_kcal: f64,
    /// Zone activities plus lifting (kcal)
    pub exercise_kcal: f64,
    /// Steps attributed to cardio sessions
    pub cardio_steps: f64,
    /// Daily steps net of cardio steps
    pub neat_steps: f64,
    /// Incidental movement (kcal)
    pub neat_kcal: f64,
    /// BMR + exercise + NEAT (kcal)
    pub base_tdee: f64,
    /// Diet category used
    pub tef_level: TefLevel,
    /// Thermic multiplier applied
    pub tef_multiplier: f64,
    /// Energy attributed to digesting food (kcal)
    pub tef_kcal: f64,
    /// Calibration factor applied
    pub calibration_factor: f64,
    /// Final TDEE (kcal)
    pub tdee: f64,
}

impl EnergyBreakdown {
    /// Component shares of `base_tdee`; all zero when the base is not positive
    #[must_use]
    pub fn shares(&self) -> ComponentShares {
        if self.base_tdee <= 0.0 {
            return ComponentShares {
                bmr_percent: 0.0,
                exercise_percent: 0.0,
                neat_percent: 0.0,
            };
        }

        ComponentShares {
            bmr_percent: self.bmr / self.base_tdee * 100.0,
            exercise_percent: self.exercise_kcal / self.base_tdee * 100.0,
            neat_percent: self.neat_kcal / self.base_tdee * 100.0,
        }
    }

    /// Final TDEE rounded to whole kcal, as displayed
    #[must_use]
    pub fn rounded_tdee(&self) -> i64 {
        self.tdee.round() as i64
    }
}

/// Compose a full day's energy expenditure from its inputs
///
/// Lifting only contributes when its duration is positive. Cardio steps are
/// derived from each activity's zone and removed from the raw step count
/// before NEAT is priced.
#[must_use]
pub fn calculate_daily_energy(inputs: &DailyInputs) -> EnergyBreakdown {
    let profile = &inputs.profile;

    let bmr_formula = BmrFormula::for_profile(profile);
    let bmr = bmr_formula.evaluate();

    let zone_exercise_kcal: f64 = inputs
        .activities
        .iter()
        .map(|activity| {
            zone_calories(
                profile.gender,
                profile.age_years,
                profile.weight_kg,
                activity.zone,
                activity.duration_minutes,
            )
        })
        .sum();

    let lifting_kcal = inputs
        .lifting
        .filter(|session| session.duration_minutes > 0.0)
        .map_or(0.0, |session| {
            lifting_calories(profile.weight_kg, session.intensity, session.duration_minutes)
        });

    let exercise_kcal = zone_exercise_kcal + lifting_kcal;

    let daily_steps = f64::from(inputs.daily_steps);
    let cardio_steps = total_cardio_steps(&inputs.activities);
    let neat_kcal = neat_from_steps(
        daily_steps,
        cardio_steps,
        profile.height_cm,
        profile.weight_kg,
    );

    let base_tdee = bmr + exercise_kcal + neat_kcal;
    let multiplier = tef_multiplier(inputs.tef_level);
    let final_tdee = tdee(
        bmr,
        exercise_kcal,
        neat_kcal,
        inputs.tef_level,
        inputs.calibration_factor,
    );

    debug!(
        formula = bmr_formula.name(),
        bmr,
        exercise_kcal,
        neat_kcal,
        tef_level = inputs.tef_level.as_str(),
        calibration = inputs.calibration_factor,
        tdee = final_tdee,
        "Composed daily energy expenditure"
    );

    EnergyBreakdown {
        bmr_formula,
        bmr,
        zone_exercise_kcal,
        lifting_kcal,
        exercise_kcal,
        cardio_steps,
        neat_steps: net_steps(daily_steps, cardio_steps),
        neat_kcal,
        base_tdee,
        tef_level: inputs.tef_level,
        tef_multiplier: multiplier,
        tef_kcal: base_tdee * (multiplier - 1.0),
        calibration_factor: inputs.calibration_factor,
        tdee: final_tdee,
    }
}
