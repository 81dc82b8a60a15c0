// ABOUTME: Caller input documents: partially specified days resolved against configured defaults
// ABOUTME: Accepts metric or imperial body measurements and converts them at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Input documents
//!
//! An [`InputDocument`] is what a caller hands over: any field may be left
//! out and is then taken from [`InputDefaults`]. Height and weight may be
//! given in metric (`height_cm`, `weight_kg`) or imperial (`height_feet` +
//! `height_inches`, `weight_lbs`), but not both. Resolution produces the
//! metric [`DailyInputs`] the engine works with.
//!
//! ```json
//! {
//!   "units": "imperial",
//!   "profile": { "gender": "female", "age_years": 35, "height_feet": 5, "height_inches": 6, "weight_lbs": 140 },
//!   "daily_steps": 9000,
//!   "activities": [{ "zone": 3, "duration_minutes": 45, "name": "Morning run" }],
//!   "lifting": { "intensity": "vigorous", "duration_minutes": 60 },
//!   "tef_level": "high",
//!   "calibration_factor": 1.05
//! }
//! ```

use crate::config::InputDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tdee_core::models::{
    CardioActivity, DailyInputs, Gender, LiftingSession, Profile, TefLevel, UnitSystem,
};
use tdee_core::{AppError, AppResult};
use tdee_intelligence::units::{feet_inches_to_cm, lbs_to_kg};
use tracing::debug;

/// Profile fields of an input document, all optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDocument {
    /// Biological sex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Height, whole feet part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_feet: Option<f64>,
    /// Height, inches part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f64>,
    /// Body mass in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Body mass in pounds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_lbs: Option<f64>,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

/// A partially specified day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputDocument {
    /// Preferred display units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitSystem>,
    /// Body measurements
    #[serde(default)]
    pub profile: ProfileDocument,
    /// Raw daily step count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_steps: Option<u32>,
    /// Logged cardio sessions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<CardioActivity>,
    /// Resistance training session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifting: Option<LiftingSession>,
    /// Thermic effect of food level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tef_level: Option<TefLevel>,
    /// Personal calibration factor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration_factor: Option<f64>,
}

/// A resolved document: engine inputs plus the caller's display preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    /// Metric inputs for the engine
    pub inputs: DailyInputs,
    /// Units to display results in
    pub units: UnitSystem,
}

impl ProfileDocument {
    /// Height in centimeters from whichever unit was supplied
    ///
    /// Imperial height needs the feet part; inches alone are rejected.
    fn resolve_height_cm(&self, default_cm: f64) -> AppResult<f64> {
        let imperial = self.height_feet.is_some() || self.height_inches.is_some();
        match (self.height_cm, imperial) {
            (Some(_), true) => Err(AppError::invalid_input(
                "Height given in both centimeters and feet/inches; supply only one",
            )),
            (Some(cm), false) => Ok(cm),
            (None, true) => {
                let feet = self.height_feet.ok_or_else(|| {
                    AppError::invalid_input("Height in inches needs a feet part (height_feet)")
                })?;
                Ok(feet_inches_to_cm(feet, self.height_inches.unwrap_or(0.0)))
            }
            (None, false) => Ok(default_cm),
        }
    }

    /// Weight in kilograms from whichever unit was supplied
    fn resolve_weight_kg(&self, default_kg: f64) -> AppResult<f64> {
        match (self.weight_kg, self.weight_lbs) {
            (Some(_), Some(_)) => Err(AppError::invalid_input(
                "Weight given in both kilograms and pounds; supply only one",
            )),
            (Some(kg), None) => Ok(kg),
            (None, Some(lbs)) => Ok(lbs_to_kg(lbs)),
            (None, None) => Ok(default_kg),
        }
    }

    /// Build a metric profile, filling gaps from `defaults`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when a measurement is given in two unit systems
    pub fn resolve(&self, defaults: &InputDefaults) -> AppResult<Profile> {
        let mut profile = Profile::new(
            self.gender.unwrap_or(defaults.gender),
            self.age_years.unwrap_or(defaults.age_years),
            self.resolve_height_cm(defaults.height_cm)?,
            self.resolve_weight_kg(defaults.weight_kg)?,
        );
        profile.body_fat_percent = self.body_fat_percent;
        Ok(profile)
    }

    /// Field-wise overlay: values set in `other` win
    fn overlay(&mut self, other: Self) {
        if other.height_cm.is_some() {
            self.height_feet = None;
            self.height_inches = None;
        }
        if other.height_feet.is_some() || other.height_inches.is_some() {
            self.height_cm = None;
        }
        if other.weight_kg.is_some() {
            self.weight_lbs = None;
        }
        if other.weight_lbs.is_some() {
            self.weight_kg = None;
        }

        self.gender = other.gender.or(self.gender);
        self.age_years = other.age_years.or(self.age_years);
        self.height_cm = other.height_cm.or(self.height_cm);
        self.height_feet = other.height_feet.or(self.height_feet);
        self.height_inches = other.height_inches.or(self.height_inches);
        self.weight_kg = other.weight_kg.or(self.weight_kg);
        self.weight_lbs = other.weight_lbs.or(self.weight_lbs);
        self.body_fat_percent = other.body_fat_percent.or(self.body_fat_percent);
    }
}

impl InputDocument {
    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON and `SerializationError`
    /// for well-formed JSON with unknown fields or wrong value types
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the file cannot be read, or a parse error
    pub fn load(path: &Path) -> AppResult<Self> {
        debug!(path = %path.display(), "Loading input document");
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!(
                "Cannot read input document {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// Field-wise overlay: values set in `other` win, and its activities are appended
    #[must_use]
    pub fn overlay(mut self, other: Self) -> Self {
        self.units = other.units.or(self.units);
        self.profile.overlay(other.profile);
        self.daily_steps = other.daily_steps.or(self.daily_steps);
        self.activities.extend(other.activities);
        self.lifting = other.lifting.or(self.lifting);
        self.tef_level = other.tef_level.or(self.tef_level);
        self.calibration_factor = other.calibration_factor.or(self.calibration_factor);
        self
    }

    /// Resolve into engine inputs, filling gaps from `defaults`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when a measurement is given in two unit systems
    pub fn resolve(self, defaults: &InputDefaults) -> AppResult<ResolvedInputs> {
        let inputs = DailyInputs {
            profile: self.profile.resolve(defaults)?,
            daily_steps: self.daily_steps.unwrap_or(defaults.daily_steps),
            activities: self.activities,
            lifting: self.lifting,
            tef_level: self.tef_level.unwrap_or(defaults.tef_level),
            calibration_factor: self
                .calibration_factor
                .unwrap_or(defaults.calibration_factor),
        };

        Ok(ResolvedInputs {
            inputs,
            units: self.units.unwrap_or(defaults.unit_system),
        })
    }
}
