// ABOUTME: Physiological constants for BMR, heart-rate, lifting, NEAT and TEF formulas
// ABOUTME: Values follow the published regressions each formula is named after
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Physiological constants based on exercise physiology research
//!
//! Every coefficient used by the calculation engine lives here so the
//! formulas read as arithmetic over named values.

/// Mifflin-St Jeor resting energy equation
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// kcal per kg of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = 5.0;
    /// Male sex constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female sex constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Katch-McArdle lean-mass equation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
pub mod katch_mcardle {
    /// Intercept (kcal/day)
    pub const INTERCEPT: f64 = 370.0;
    /// kcal per kg of lean body mass
    pub const LEAN_MASS_COEF: f64 = 21.6;
}

/// Heart-rate based energy expenditure
///
/// Reference: Keytel, L.R., et al. (2005). Prediction of energy expenditure from
/// heart rate monitoring during submaximal exercise. *J Sports Sci*, 23(3), 289-297.
pub mod heart_rate {
    /// Fox age-predicted maximum: `220 - age`
    pub const FOX_MAX_HR_BASE: f64 = 220.0;

    /// Zone 1 midpoint (50-60% of max HR)
    pub const ZONE1_MIDPOINT: f64 = 0.55;
    /// Zone 2 midpoint (60-70% of max HR)
    pub const ZONE2_MIDPOINT: f64 = 0.65;
    /// Zone 3 midpoint (70-80% of max HR)
    pub const ZONE3_MIDPOINT: f64 = 0.75;
    /// Zone 4 midpoint (80-90% of max HR)
    pub const ZONE4_MIDPOINT: f64 = 0.85;
    /// Zone 5 midpoint (90%+ of max HR)
    pub const ZONE5_MIDPOINT: f64 = 0.95;

    /// Male regression: heart-rate coefficient
    pub const MALE_HR_COEF: f64 = 0.6309;
    /// Male regression: weight coefficient
    pub const MALE_WEIGHT_COEF: f64 = 0.1988;
    /// Male regression: age coefficient
    pub const MALE_AGE_COEF: f64 = 0.2017;
    /// Male regression: intercept
    pub const MALE_INTERCEPT: f64 = -55.0969;

    /// Female regression: heart-rate coefficient
    pub const FEMALE_HR_COEF: f64 = 0.4472;
    /// Female regression: weight coefficient
    pub const FEMALE_WEIGHT_COEF: f64 = -0.1263;
    /// Female regression: age coefficient
    pub const FEMALE_AGE_COEF: f64 = 0.074;
    /// Female regression: intercept
    pub const FEMALE_INTERCEPT: f64 = -20.4022;

    /// Kilojoules per kilocalorie
    pub const KJ_PER_KCAL: f64 = 4.184;
}

/// Resistance training energy cost
///
/// Reference: Ainsworth, B.E., et al. (2011). Compendium of Physical Activities.
/// *Med Sci Sports Exerc*, 43(8), 1575-1581.
pub mod lifting {
    /// MET for moderate effort weight training
    pub const MODERATE_MET: f64 = 3.5;
    /// MET for vigorous effort weight training
    pub const VIGOROUS_MET: f64 = 6.0;
    /// Post-exercise recovery overhead (EPOC) added on top of the base cost
    pub const EPOC_FRACTION: f64 = 0.10;
}

/// Step-based incidental movement (NEAT)
pub mod neat {
    /// Stride length as a fraction of height
    pub const STRIDE_HEIGHT_RATIO: f64 = 0.413;
    /// Assumed walking speed (km/h)
    pub const WALKING_SPEED_KMH: f64 = 4.8;
    /// MET for everyday walking
    pub const WALKING_MET: f64 = 3.5;

    /// Cadence attributed to low intensity cardio (walking pace, zones 1-2)
    pub const LOW_STEPS_PER_MINUTE: f64 = 100.0;
    /// Cadence attributed to moderate intensity cardio (jogging, zone 3)
    pub const MODERATE_STEPS_PER_MINUTE: f64 = 140.0;
    /// Cadence attributed to high intensity cardio (running, zones 4-5)
    pub const HIGH_STEPS_PER_MINUTE: f64 = 180.0;

    /// Conventional upper bound on a daily step count
    pub const MAX_DAILY_STEPS: u32 = 50_000;
}

/// Thermic effect of food multipliers
///
/// Reference: Westerterp, K.R. (2004). Diet induced thermogenesis.
/// *Nutrition & Metabolism*, 1, 5.
pub mod tef {
    /// Low protein / high fat diets (8%)
    pub const LOW_MULTIPLIER: f64 = 1.08;
    /// Balanced diets (10%)
    pub const BALANCED_MULTIPLIER: f64 = 1.10;
    /// High protein diets, 150g+ daily (15%)
    pub const HIGH_MULTIPLIER: f64 = 1.15;
}

/// Personal metabolic calibration
pub mod calibration {
    /// Neutral calibration
    pub const DEFAULT_FACTOR: f64 = 1.0;
    /// Lowest accepted factor (-15%)
    pub const MIN_FACTOR: f64 = 0.85;
    /// Highest accepted factor (+15%)
    pub const MAX_FACTOR: f64 = 1.15;
}
