// ABOUTME: Heart-rate zone energy estimation from age-predicted max HR
// ABOUTME: Zone midpoints feed the sex-specific Keytel regression, converted from kJ to kcal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Heart-rate zone energy estimation
//!
//! A zone is an ordinal bucket, not a measurement. It is turned into a
//! representative heart rate with the Fox estimate `220 - age` and the zone's
//! midpoint fraction, then fed to the Keytel et al. (2005) regression:
//!
//! - male: `(t x (0.6309 HR + 0.1988 W + 0.2017 A - 55.0969)) / 4.184`
//! - female: `(t x (0.4472 HR - 0.1263 W + 0.074 A - 20.4022)) / 4.184`
//!
//! Results are not clamped. Very short, very easy sessions can produce a
//! negative value; composers treat that as a valid intermediate.

use tdee_core::constants::physiology::heart_rate as hr;
use tdee_core::models::{Gender, HeartRateZone};

/// Age-predicted maximum heart rate (Fox): `220 - age`
///
/// No clamp is applied; keep age within 15-100 for physiological results.
#[must_use]
pub fn max_heart_rate(age_years: u32) -> f64 {
    hr::FOX_MAX_HR_BASE - f64::from(age_years)
}

/// Representative fraction of max HR for a zone
#[must_use]
pub const fn zone_midpoint(zone: HeartRateZone) -> f64 {
    match zone {
        HeartRateZone::Zone1 => hr::ZONE1_MIDPOINT,
        HeartRateZone::Zone2 => hr::ZONE2_MIDPOINT,
        HeartRateZone::Zone3 => hr::ZONE3_MIDPOINT,
        HeartRateZone::Zone4 => hr::ZONE4_MIDPOINT,
        HeartRateZone::Zone5 => hr::ZONE5_MIDPOINT,
    }
}

/// Average heart rate (bpm) for time spent in a zone
#[must_use]
pub fn average_heart_rate(zone: HeartRateZone, age_years: u32) -> f64 {
    max_heart_rate(age_years) * zone_midpoint(zone)
}

/// Energy cost (kcal) of exercising at a given heart rate
///
/// # Arguments
/// * `gender` - Selects the regression coefficients
/// * `age_years` - Age in years
/// * `weight_kg` - Body mass in kilograms
/// * `heart_rate_bpm` - Average heart rate during the session
/// * `duration_minutes` - Session length in minutes
///
/// # Reference
/// Keytel et al. (2005) DOI: 10.1080/02640410470001730089
#[must_use]
pub fn calories_from_heart_rate(
    gender: Gender,
    age_years: u32,
    weight_kg: f64,
    heart_rate_bpm: f64,
    duration_minutes: f64,
) -> f64 {
    let age = f64::from(age_years);
    let kj_per_minute = match gender {
        Gender::Male => hr::MALE_HR_COEF.mul_add(
            heart_rate_bpm,
            hr::MALE_WEIGHT_COEF.mul_add(
                weight_kg,
                hr::MALE_AGE_COEF.mul_add(age, hr::MALE_INTERCEPT),
            ),
        ),
        Gender::Female => hr::FEMALE_HR_COEF.mul_add(
            heart_rate_bpm,
            hr::FEMALE_WEIGHT_COEF.mul_add(
                weight_kg,
                hr::FEMALE_AGE_COEF.mul_add(age, hr::FEMALE_INTERCEPT),
            ),
        ),
    };

    duration_minutes * kj_per_minute / hr::KJ_PER_KCAL
}

/// Energy cost (kcal) of a session spent in a heart-rate zone
#[must_use]
pub fn zone_calories(
    gender: Gender,
    age_years: u32,
    weight_kg: f64,
    zone: HeartRateZone,
    duration_minutes: f64,
) -> f64 {
    let average_hr = average_heart_rate(zone, age_years);
    calories_from_heart_rate(gender, age_years, weight_kg, average_hr, duration_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone3_average_heart_rate_at_30() {
        assert!((max_heart_rate(30) - 190.0).abs() < f64::EPSILON);
        assert!((average_heart_rate(HeartRateZone::Zone3, 30) - 142.5).abs() < 1e-9);
    }

    #[test]
    fn test_zone_midpoints_ascend() {
        let midpoints: Vec<f64> = HeartRateZone::ALL.iter().map(|z| zone_midpoint(*z)).collect();
        assert_eq!(midpoints, vec![0.55, 0.65, 0.75, 0.85, 0.95]);
    }

    #[test]
    fn test_male_calories_from_heart_rate() {
        // 0.6309 x 142.5 + 0.1988 x 82 + 0.2017 x 30 - 55.0969 = 57.15895 kJ/min
        let kcal = calories_from_heart_rate(Gender::Male, 30, 82.0, 142.5, 60.0);
        let expected = 60.0 * 57.158_95 / 4.184;
        assert!((kcal - expected).abs() < 1e-6);
        assert!((kcal - 819.679).abs() < 0.01);
    }

    #[test]
    fn test_female_calories_from_heart_rate() {
        // 0.4472 x 140 - 0.1263 x 60 + 0.074 x 35 - 20.4022 = 37.2178 kJ/min
        let kcal = calories_from_heart_rate(Gender::Female, 35, 60.0, 140.0, 30.0);
        let expected = 30.0 * 37.2178 / 4.184;
        assert!((kcal - expected).abs() < 1e-6);
    }

    #[test]
    fn test_zone_calories_matches_explicit_heart_rate() {
        let via_zone = zone_calories(Gender::Female, 45, 68.0, HeartRateZone::Zone4, 40.0);
        let hr = average_heart_rate(HeartRateZone::Zone4, 45);
        let direct = calories_from_heart_rate(Gender::Female, 45, 68.0, hr, 40.0);
        assert!((via_zone - direct).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_output_is_preserved() {
        // Zone 1 at 95 years and 200 kg: avg HR 68.75 bpm gives -7.8872 kJ/min
        let kcal = zone_calories(Gender::Female, 95, 200.0, HeartRateZone::Zone1, 10.0);
        assert!(kcal < 0.0);
    }

    #[test]
    fn test_zero_duration_is_zero() {
        let kcal = zone_calories(Gender::Male, 30, 82.0, HeartRateZone::Zone5, 0.0);
        assert!(kcal.abs() < f64::EPSILON);
    }
}
