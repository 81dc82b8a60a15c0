// ABOUTME: Input defaults and output preferences used when the caller leaves values unset
// ABOUTME: Mirrors the starting state of the interactive form (male, 30 y, 178 cm, 82 kg)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use serde::{Deserialize, Serialize};
use tdee_core::constants::physiology::calibration;
use tdee_core::models::{Gender, Profile, TefLevel, UnitSystem};

/// Values used for any input the caller does not supply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body mass in kilograms
    pub weight_kg: f64,
    /// Raw daily step count
    pub daily_steps: u32,
    /// Thermic effect of food level
    pub tef_level: TefLevel,
    /// Personal calibration factor
    pub calibration_factor: f64,
    /// Unit system used for display
    pub unit_system: UnitSystem,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age_years: 30,
            height_cm: 178.0,
            weight_kg: 82.0,
            daily_steps: 8_000,
            tef_level: TefLevel::Balanced,
            calibration_factor: calibration::DEFAULT_FACTOR,
            unit_system: UnitSystem::Imperial,
        }
    }
}

impl InputDefaults {
    /// Default profile without body fat
    #[must_use]
    pub const fn profile(&self) -> Profile {
        Profile::new(self.gender, self.age_years, self.height_cm, self.weight_kg)
    }
}

/// Presentation preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Round displayed kcal values to whole numbers
    pub round_output: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { round_output: true }
    }
}
