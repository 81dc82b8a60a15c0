// ABOUTME: Advisory range predicates for every external input of the engine
// ABOUTME: Collects all out-of-range fields of a day into a single validation report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Input validation
//!
//! These checks belong to the caller's input boundary. The formula functions
//! never enforce them: handed out-of-range values they still return a number.
//! Validation is collected rather than short-circuited so a form can flag
//! every offending field at once.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use tdee_core::constants::physiology::{calibration, neat};
use tdee_core::models::DailyInputs;
use tdee_core::{AppError, AppResult};

/// Inclusive acceptance range for a numeric input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeLimit {
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
}

impl RangeLimit {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within `[min, max]`; NaN is never accepted
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether the bounds are ordered
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl fmt::Display for RangeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Acceptance ranges for every external input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Age in years
    pub age_years: RangeLimit,
    /// Height in centimeters
    pub height_cm: RangeLimit,
    /// Body mass in kilograms
    pub weight_kg: RangeLimit,
    /// Body fat percentage
    pub body_fat_percent: RangeLimit,
    /// Daily step count
    pub daily_steps: RangeLimit,
    /// Exercise duration in minutes
    pub duration_minutes: RangeLimit,
    /// Heart rate in bpm
    pub heart_rate_bpm: RangeLimit,
    /// Calibration factor
    pub calibration_factor: RangeLimit,
}

impl ValidationLimits {
    /// Standard acceptance ranges used by the input form
    #[allow(clippy::cast_lossless)] // f64::from is not const
    pub const STANDARD: Self = Self {
        age_years: RangeLimit::new(15.0, 100.0),
        height_cm: RangeLimit::new(120.0, 230.0),
        weight_kg: RangeLimit::new(35.0, 225.0),
        body_fat_percent: RangeLimit::new(5.0, 50.0),
        daily_steps: RangeLimit::new(0.0, neat::MAX_DAILY_STEPS as f64),
        duration_minutes: RangeLimit::new(0.0, 240.0),
        heart_rate_bpm: RangeLimit::new(40.0, 220.0),
        calibration_factor: RangeLimit::new(calibration::MIN_FACTOR, calibration::MAX_FACTOR),
    };

    /// Named ranges, for consistency checks and display
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, RangeLimit); 8] {
        [
            ("age_years", self.age_years),
            ("height_cm", self.height_cm),
            ("weight_kg", self.weight_kg),
            ("body_fat_percent", self.body_fat_percent),
            ("daily_steps", self.daily_steps),
            ("duration_minutes", self.duration_minutes),
            ("heart_rate_bpm", self.heart_rate_bpm),
            ("calibration_factor", self.calibration_factor),
        ]
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Age within 15-100 years
#[must_use]
pub fn is_valid_age(age_years: f64) -> bool {
    ValidationLimits::STANDARD.age_years.contains(age_years)
}

/// Height within 120-230 cm
#[must_use]
pub fn is_valid_height_cm(height_cm: f64) -> bool {
    ValidationLimits::STANDARD.height_cm.contains(height_cm)
}

/// Weight within 35-225 kg
#[must_use]
pub fn is_valid_weight_kg(weight_kg: f64) -> bool {
    ValidationLimits::STANDARD.weight_kg.contains(weight_kg)
}

/// Body fat within 5-50 %
#[must_use]
pub fn is_valid_body_fat(body_fat_percent: f64) -> bool {
    ValidationLimits::STANDARD.body_fat_percent.contains(body_fat_percent)
}

/// Steps within 0-50000
#[must_use]
pub fn is_valid_steps(steps: f64) -> bool {
    ValidationLimits::STANDARD.daily_steps.contains(steps)
}

/// Duration within 0-240 minutes
#[must_use]
pub fn is_valid_duration(duration_minutes: f64) -> bool {
    ValidationLimits::STANDARD.duration_minutes.contains(duration_minutes)
}

/// Heart rate within 40-220 bpm
#[must_use]
pub fn is_valid_heart_rate(heart_rate_bpm: f64) -> bool {
    ValidationLimits::STANDARD.heart_rate_bpm.contains(heart_rate_bpm)
}

/// Calibration within 0.85-1.15
#[must_use]
pub fn is_valid_calibration(factor: f64) -> bool {
    ValidationLimits::STANDARD.calibration_factor.contains(factor)
}

/// A single out-of-range input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path of the offending field (e.g. `activities[1].duration_minutes`)
    pub field: String,
    /// Value supplied
    pub value: f64,
    /// Accepted range
    pub limit: RangeLimit,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside the accepted range {}",
            self.field, self.value, self.limit
        )
    }
}

/// Every out-of-range field found in a set of inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Issues in field order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Record `value` for `field` if it falls outside `limit`
    pub fn check(&mut self, field: impl Into<String>, value: f64, limit: RangeLimit) {
        if !limit.contains(value) {
            self.issues.push(ValidationIssue {
                field: field.into(),
                value,
                limit,
            });
        }
    }

    /// No issues were found
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Names of the offending fields
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }

    /// Turn a failed report into a `ValueOutOfRange` error
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ErrorCode::ValueOutOfRange` when any issue was recorded
    pub fn into_result(self) -> AppResult<()> {
        if self.is_valid() {
            return Ok(());
        }

        let summary = self
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Err(
            AppError::value_out_of_range(summary).with_details(json!({
                "issues": self.issues,
            })),
        )
    }
}

/// Apply every range predicate to a day's inputs
///
/// Body fat is only checked when supplied. Each cardio session and the
/// lifting session are checked against the duration range.
#[must_use]
pub fn validate_inputs(inputs: &DailyInputs, limits: &ValidationLimits) -> ValidationReport {
    let mut report = ValidationReport::default();
    let profile = &inputs.profile;

    report.check("age_years", f64::from(profile.age_years), limits.age_years);
    report.check("height_cm", profile.height_cm, limits.height_cm);
    report.check("weight_kg", profile.weight_kg, limits.weight_kg);
    if let Some(body_fat) = profile.body_fat_percent {
        report.check("body_fat_percent", body_fat, limits.body_fat_percent);
    }

    report.check("daily_steps", f64::from(inputs.daily_steps), limits.daily_steps);

    for (index, activity) in inputs.activities.iter().enumerate() {
        report.check(
            format!("activities[{index}].duration_minutes"),
            activity.duration_minutes,
            limits.duration_minutes,
        );
    }

    if let Some(lifting) = inputs.lifting {
        report.check(
            "lifting.duration_minutes",
            lifting.duration_minutes,
            limits.duration_minutes,
        );
    }

    report.check(
        "calibration_factor",
        inputs.calibration_factor,
        limits.calibration_factor,
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdee_core::models::{
        CardioActivity, Gender, HeartRateZone, LiftingIntensity, LiftingSession, Profile,
    };
    use tdee_core::ErrorCode;

    fn typical_day() -> DailyInputs {
        DailyInputs::new(Profile::new(Gender::Male, 30, 178.0, 82.0))
            .with_steps(8_000)
            .with_activity(CardioActivity::new(HeartRateZone::Zone3, 45.0))
    }

    #[test]
    fn test_standard_predicates_are_inclusive() {
        assert!(is_valid_age(15.0) && is_valid_age(100.0));
        assert!(!is_valid_age(14.9) && !is_valid_age(101.0));
        assert!(is_valid_height_cm(120.0) && !is_valid_height_cm(231.0));
        assert!(is_valid_weight_kg(225.0) && !is_valid_weight_kg(34.0));
        assert!(is_valid_body_fat(5.0) && !is_valid_body_fat(51.0));
        assert!(is_valid_steps(0.0) && !is_valid_steps(50_001.0));
        assert!(is_valid_duration(240.0) && !is_valid_duration(-1.0));
        assert!(is_valid_heart_rate(40.0) && !is_valid_heart_rate(221.0));
        assert!(is_valid_calibration(0.85) && is_valid_calibration(1.15));
        assert!(!is_valid_calibration(1.2));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(!is_valid_weight_kg(f64::NAN));
    }

    #[test]
    fn test_typical_day_is_valid() {
        let report = validate_inputs(&typical_day(), &ValidationLimits::default());
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_collects_every_issue() {
        let mut inputs = typical_day()
            .with_activity(CardioActivity::new(HeartRateZone::Zone1, 300.0))
            .with_lifting(LiftingSession {
                intensity: LiftingIntensity::Vigorous,
                duration_minutes: 500.0,
            })
            .with_calibration(1.3);
        inputs.profile.age_years = 12;
        inputs.profile.body_fat_percent = Some(60.0);

        let report = validate_inputs(&inputs, &ValidationLimits::default());
        assert_eq!(
            report.fields(),
            vec![
                "age_years",
                "body_fat_percent",
                "activities[1].duration_minutes",
                "lifting.duration_minutes",
                "calibration_factor",
            ]
        );
    }

    #[test]
    fn test_failed_report_converts_to_out_of_range_error() {
        let inputs = typical_day().with_steps(60_000);
        let error = validate_inputs(&inputs, &ValidationLimits::default())
            .into_result()
            .unwrap_err();

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains("daily_steps = 60000"));
        assert_eq!(error.details["issues"][0]["field"], "daily_steps");
    }
}
