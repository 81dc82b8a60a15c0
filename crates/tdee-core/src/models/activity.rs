// ABOUTME: Exercise models for heart-rate zone cardio and resistance training sessions
// ABOUTME: Zones, cardio cadence buckets and lifting intensities are closed enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal heart-rate zone (1-5), a bucket of intensity relative to max HR
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeartRateZone {
    /// 50-60% of max HR
    Zone1,
    /// 60-70% of max HR
    Zone2,
    /// 70-80% of max HR
    Zone3,
    /// 80-90% of max HR
    Zone4,
    /// 90%+ of max HR
    Zone5,
}

impl HeartRateZone {
    /// All zones in ascending order
    pub const ALL: [Self; 5] = [
        Self::Zone1,
        Self::Zone2,
        Self::Zone3,
        Self::Zone4,
        Self::Zone5,
    ];

    /// Zone number (1-5)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Zone1 => 1,
            Self::Zone2 => 2,
            Self::Zone3 => 3,
            Self::Zone4 => 4,
            Self::Zone5 => 5,
        }
    }

    /// Training label commonly attached to the zone
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zone1 => "Recovery",
            Self::Zone2 => "Endurance",
            Self::Zone3 => "Tempo",
            Self::Zone4 => "Threshold",
            Self::Zone5 => "VO2 max",
        }
    }
}

impl TryFrom<u8> for HeartRateZone {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Zone1),
            2 => Ok(Self::Zone2),
            3 => Ok(Self::Zone3),
            4 => Ok(Self::Zone4),
            5 => Ok(Self::Zone5),
            other => Err(AppError::invalid_input(format!(
                "Heart rate zone must be between 1 and 5, got {other}"
            ))),
        }
    }
}

impl From<HeartRateZone> for u8 {
    fn from(zone: HeartRateZone) -> Self {
        zone.number()
    }
}

impl fmt::Display for HeartRateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zone {}", self.number())
    }
}

impl FromStr for HeartRateZone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("zone")
            .or_else(|| trimmed.strip_prefix("Zone"))
            .or_else(|| trimmed.strip_prefix('z'))
            .or_else(|| trimmed.strip_prefix('Z'))
            .unwrap_or(trimmed)
            .trim();
        let number: u8 = digits
            .parse()
            .map_err(|_| AppError::invalid_input(format!("Invalid heart rate zone: '{s}'")))?;
        Self::try_from(number)
    }
}

/// Cadence bucket used to attribute steps to a cardio session
///
/// Distinct from [`LiftingIntensity`]: this one describes foot strike rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardioIntensity {
    /// Walking pace (zones 1-2)
    Low,
    /// Jogging (zone 3)
    Moderate,
    /// Running (zones 4-5)
    High,
}

impl CardioIntensity {
    /// Bucket a heart-rate zone into a cadence category
    #[must_use]
    pub const fn from_zone(zone: HeartRateZone) -> Self {
        match zone {
            HeartRateZone::Zone1 | HeartRateZone::Zone2 => Self::Low,
            HeartRateZone::Zone3 => Self::Moderate,
            HeartRateZone::Zone4 | HeartRateZone::Zone5 => Self::High,
        }
    }
}

impl From<HeartRateZone> for CardioIntensity {
    fn from(zone: HeartRateZone) -> Self {
        Self::from_zone(zone)
    }
}

/// Effort level of a resistance training session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftingIntensity {
    /// Moderate effort (3.5 MET)
    #[default]
    Moderate,
    /// Vigorous effort (6.0 MET)
    Vigorous,
}

impl LiftingIntensity {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Moderate => "moderate",
            Self::Vigorous => "vigorous",
        }
    }
}

impl fmt::Display for LiftingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LiftingIntensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moderate" => Ok(Self::Moderate),
            "vigorous" => Ok(Self::Vigorous),
            other => Err(AppError::invalid_input(format!(
                "Unknown lifting intensity: '{other}'. Valid options: moderate, vigorous"
            ))),
        }
    }
}

/// A logged cardio session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardioActivity {
    /// Heart-rate zone the session was spent in
    pub zone: HeartRateZone,
    /// Duration in minutes
    pub duration_minutes: f64,
    /// Optional label ("Morning run")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CardioActivity {
    /// Create an unnamed cardio session
    #[must_use]
    pub const fn new(zone: HeartRateZone, duration_minutes: f64) -> Self {
        Self {
            zone,
            duration_minutes,
            name: None,
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A resistance training session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiftingSession {
    /// Effort level
    pub intensity: LiftingIntensity,
    /// Duration in minutes
    pub duration_minutes: f64,
}
