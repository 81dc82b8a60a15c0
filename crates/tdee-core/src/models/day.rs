// ABOUTME: Complete set of inputs for one daily energy expenditure calculation
// ABOUTME: Bundles profile, steps, cardio log, lifting, diet and calibration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use super::{CardioActivity, LiftingSession, Profile, TefLevel};
use crate::constants::physiology::calibration;
use serde::{Deserialize, Serialize};

const fn default_calibration() -> f64 {
    calibration::DEFAULT_FACTOR
}

/// Everything the composer needs for a single day
///
/// Built fresh per calculation and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyInputs {
    /// Person profile (metric)
    pub profile: Profile,
    /// Raw daily step count, including steps taken during cardio
    #[serde(default)]
    pub daily_steps: u32,
    /// Logged cardio sessions
    #[serde(default)]
    pub activities: Vec<CardioActivity>,
    /// Resistance training session, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifting: Option<LiftingSession>,
    /// Thermic effect of food level
    #[serde(default)]
    pub tef_level: TefLevel,
    /// Personal metabolic calibration (0.85-1.15)
    #[serde(default = "default_calibration")]
    pub calibration_factor: f64,
}

impl DailyInputs {
    /// Inputs for a rest day: no steps, no exercise, balanced diet, neutral calibration
    #[must_use]
    pub const fn new(profile: Profile) -> Self {
        Self {
            profile,
            daily_steps: 0,
            activities: Vec::new(),
            lifting: None,
            tef_level: TefLevel::Balanced,
            calibration_factor: calibration::DEFAULT_FACTOR,
        }
    }

    /// Set the raw daily step count
    #[must_use]
    pub fn with_steps(mut self, daily_steps: u32) -> Self {
        self.daily_steps = daily_steps;
        self
    }

    /// Log a cardio session
    #[must_use]
    pub fn with_activity(mut self, activity: CardioActivity) -> Self {
        self.activities.push(activity);
        self
    }

    /// Set the lifting session
    #[must_use]
    pub fn with_lifting(mut self, lifting: LiftingSession) -> Self {
        self.lifting = Some(lifting);
        self
    }

    /// Set the thermic effect of food level
    #[must_use]
    pub fn with_tef_level(mut self, tef_level: TefLevel) -> Self {
        self.tef_level = tef_level;
        self
    }

    /// Set the calibration factor
    #[must_use]
    pub fn with_calibration(mut self, calibration_factor: f64) -> Self {
        self.calibration_factor = calibration_factor;
        self
    }
}
