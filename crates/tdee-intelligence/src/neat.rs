// ABOUTME: Non-exercise activity thermogenesis estimated from a net daily step count
// ABOUTME: Subtracts steps attributed to logged cardio so movement is not counted twice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! NEAT (Non-Exercise Activity Thermogenesis)
//!
//! Steps are turned into walking time through a height-derived stride and a
//! fixed walking speed, then priced at the walking MET:
//!
//! ```text
//! stride_cm   = height_cm x 0.413
//! distance_km = net_steps x stride_cm / 100000
//! hours       = distance_km / 4.8
//! kcal        = 3.5 x weight_kg x hours
//! ```
//!
//! Cardio sessions already account for their own movement, so each one is
//! credited with `duration x cadence` steps (100/140/180 per minute for
//! low/moderate/high) which are removed from the raw count first.

use tdee_core::constants::physiology::neat;
use tdee_core::constants::units::CM_PER_KM;
use tdee_core::models::{CardioActivity, CardioIntensity};

/// Steps per minute attributed to a cardio cadence bucket
#[must_use]
pub const fn steps_per_minute(intensity: CardioIntensity) -> f64 {
    match intensity {
        CardioIntensity::Low => neat::LOW_STEPS_PER_MINUTE,
        CardioIntensity::Moderate => neat::MODERATE_STEPS_PER_MINUTE,
        CardioIntensity::High => neat::HIGH_STEPS_PER_MINUTE,
    }
}

/// Steps taken during a cardio session of the given cadence
#[must_use]
pub fn estimate_cardio_steps(duration_minutes: f64, intensity: CardioIntensity) -> f64 {
    duration_minutes * steps_per_minute(intensity)
}

/// Steps attributed to all logged cardio sessions, bucketed by zone
#[must_use]
pub fn total_cardio_steps(activities: &[CardioActivity]) -> f64 {
    activities
        .iter()
        .map(|activity| {
            estimate_cardio_steps(
                activity.duration_minutes,
                CardioIntensity::from_zone(activity.zone),
            )
        })
        .sum()
}

/// Daily steps net of cardio steps, floored at zero
#[must_use]
pub fn net_steps(total_steps: f64, cardio_steps: f64) -> f64 {
    (total_steps - cardio_steps).max(0.0)
}

/// Stride length estimated from height
#[must_use]
pub fn stride_length_cm(height_cm: f64) -> f64 {
    height_cm * neat::STRIDE_HEIGHT_RATIO
}

/// NEAT energy cost (kcal) for the steps not attributed to cardio
#[must_use]
pub fn neat_from_steps(total_steps: f64, cardio_steps: f64, height_cm: f64, weight_kg: f64) -> f64 {
    let steps = net_steps(total_steps, cardio_steps);
    let distance_km = steps * stride_length_cm(height_cm) / CM_PER_KM;
    let time_hours = distance_km / neat::WALKING_SPEED_KMH;

    neat::WALKING_MET * weight_kg * time_hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tdee_core::models::HeartRateZone;

    #[test]
    fn test_reference_day_8000_steps() {
        // stride 73.514 cm, 5.88112 km, 1.225233 h
        assert!((stride_length_cm(178.0) - 73.514).abs() < 1e-9);
        let kcal = neat_from_steps(8000.0, 0.0, 178.0, 82.0);
        assert!((kcal - 351.642).abs() < 0.01);
    }

    #[test]
    fn test_cardio_step_cadences() {
        let cases = [
            (CardioIntensity::Low, 3000.0),
            (CardioIntensity::Moderate, 4200.0),
            (CardioIntensity::High, 5400.0),
        ];
        for (intensity, expected) in cases {
            assert!((estimate_cardio_steps(30.0, intensity) - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_total_cardio_steps_buckets_by_zone() {
        let activities = vec![
            CardioActivity::new(HeartRateZone::Zone2, 20.0),
            CardioActivity::new(HeartRateZone::Zone3, 10.0),
            CardioActivity::new(HeartRateZone::Zone5, 5.0),
        ];
        // 20 x 100 + 10 x 140 + 5 x 180
        assert!((total_cardio_steps(&activities) - 4300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cardio_steps_beyond_total_floor_at_zero() {
        assert!(net_steps(3000.0, 5400.0).abs() < f64::EPSILON);
        assert!(neat_from_steps(3000.0, 5400.0, 178.0, 82.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cardio_steps_reduce_neat() {
        let all = neat_from_steps(10_000.0, 0.0, 170.0, 70.0);
        let net = neat_from_steps(10_000.0, 4_000.0, 170.0, 70.0);
        assert!((net / all - 0.6).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_neat_never_negative(
            total in 0.0_f64..50_000.0,
            cardio in 0.0_f64..60_000.0,
            height in 120.0_f64..230.0,
            weight in 35.0_f64..225.0,
        ) {
            prop_assert!(neat_from_steps(total, cardio, height, weight) >= 0.0);
        }
    }
}
