// ABOUTME: Diet profile model selecting the thermic effect of food level
// ABOUTME: Closed three-level enumeration with balanced as the default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Thermic effect of food category, driven by typical diet composition
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TefLevel {
    /// Low protein / high fat diets
    Low,
    /// Balanced diets
    #[default]
    Balanced,
    /// High protein diets (150g+ daily)
    High,
}

impl TefLevel {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Balanced => "balanced",
            Self::High => "high",
        }
    }

    /// Short description of the diet this level represents
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low protein / high fat",
            Self::Balanced => "Balanced macronutrients",
            Self::High => "High protein (150g+ daily)",
        }
    }
}

impl fmt::Display for TefLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TefLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "balanced" => Ok(Self::Balanced),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown TEF level: '{other}'. Valid options: low, balanced, high"
            ))),
        }
    }
}
