// ABOUTME: Resistance training energy cost from MET, body mass and duration
// ABOUTME: Adds a fixed 10% post-exercise recovery overhead (EPOC) on top of the base cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use tdee_core::constants::physiology::lifting;
use tdee_core::constants::units::MINUTES_PER_HOUR;
use tdee_core::models::LiftingIntensity;

/// MET value for a lifting intensity
///
/// Reference: Ainsworth et al. (2011) Compendium of Physical Activities, codes 02052/02054
#[must_use]
pub const fn lifting_met(intensity: LiftingIntensity) -> f64 {
    match intensity {
        LiftingIntensity::Moderate => lifting::MODERATE_MET,
        LiftingIntensity::Vigorous => lifting::VIGOROUS_MET,
    }
}

/// Base energy cost before recovery overhead: `MET x kg x hours`
#[must_use]
pub fn base_lifting_calories(
    weight_kg: f64,
    intensity: LiftingIntensity,
    duration_minutes: f64,
) -> f64 {
    lifting_met(intensity) * weight_kg * (duration_minutes / MINUTES_PER_HOUR)
}

/// Total lifting energy cost (kcal) including the 10% EPOC bonus
///
/// Zero duration yields zero energy.
#[must_use]
pub fn lifting_calories(weight_kg: f64, intensity: LiftingIntensity, duration_minutes: f64) -> f64 {
    base_lifting_calories(weight_kg, intensity, duration_minutes) * (1.0 + lifting::EPOC_FRACTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_moderate_hour_at_80kg() {
        // 3.5 x 80 x 1 = 280, plus 10% = 308
        let kcal = lifting_calories(80.0, LiftingIntensity::Moderate, 60.0);
        assert!((kcal - 308.0).abs() < 1e-9);
    }

    #[test]
    fn test_vigorous_45_minutes() {
        // 6.0 x 90 x 0.75 = 405, plus 10% = 445.5
        let kcal = lifting_calories(90.0, LiftingIntensity::Vigorous, 45.0);
        assert!((kcal - 445.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_is_zero() {
        assert!(lifting_calories(80.0, LiftingIntensity::Vigorous, 0.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_total_is_base_plus_ten_percent(
            weight in 35.0_f64..225.0,
            minutes in 0.0_f64..240.0,
            vigorous in any::<bool>(),
        ) {
            let intensity = if vigorous {
                LiftingIntensity::Vigorous
            } else {
                LiftingIntensity::Moderate
            };
            let met = if vigorous { 6.0 } else { 3.5 };
            let expected = 1.10 * (met * weight * (minutes / 60.0));
            let actual = lifting_calories(weight, intensity, minutes);
            prop_assert!((actual - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
