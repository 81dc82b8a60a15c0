// ABOUTME: Person profile model with sex, age, height, weight and optional body fat
// ABOUTME: Includes the unit system selector used by callers at the input boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the sex-specific regressions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (Mifflin-St Jeor +5, male heart-rate regression)
    #[default]
    Male,
    /// Female (Mifflin-St Jeor -161, female heart-rate regression)
    Female,
}

impl Gender {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Measurement system the caller enters and displays values in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Pounds, feet and inches
    #[default]
    Imperial,
    /// Kilograms and centimeters
    Metric,
}

impl UnitSystem {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imperial" => Ok(Self::Imperial),
            "metric" => Ok(Self::Metric),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system: '{other}'. Valid options: imperial, metric"
            ))),
        }
    }
}

/// Person profile in metric units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body mass in kilograms
    pub weight_kg: f64,
    /// Body fat percentage (0-99), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

impl Profile {
    /// Create a profile without body composition data
    #[must_use]
    pub const fn new(gender: Gender, age_years: u32, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            gender,
            age_years,
            height_cm,
            weight_kg,
            body_fat_percent: None,
        }
    }

    /// Attach a body fat percentage
    #[must_use]
    pub const fn with_body_fat(mut self, body_fat_percent: f64) -> Self {
        self.body_fat_percent = Some(body_fat_percent);
        self
    }
}
