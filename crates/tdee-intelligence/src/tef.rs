// ABOUTME: Thermic effect of food multiplier lookup by diet category
// ABOUTME: Exhaustive mapping over the closed TEF level enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use tdee_core::constants::physiology::tef;
use tdee_core::models::TefLevel;

/// Energy multiplier for digesting, absorbing and processing food
///
/// - Low (low protein / high fat): 1.08
/// - Balanced (default): 1.10
/// - High (high protein): 1.15
#[must_use]
pub const fn tef_multiplier(level: TefLevel) -> f64 {
    match level {
        TefLevel::Low => tef::LOW_MULTIPLIER,
        TefLevel::Balanced => tef::BALANCED_MULTIPLIER,
        TefLevel::High => tef::HIGH_MULTIPLIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_multipliers_are_exact_and_ordered() {
        assert_eq!(tef_multiplier(TefLevel::Low), 1.08);
        assert_eq!(tef_multiplier(TefLevel::Balanced), 1.10);
        assert_eq!(tef_multiplier(TefLevel::High), 1.15);
        assert!(tef_multiplier(TefLevel::Low) < tef_multiplier(TefLevel::Balanced));
        assert!(tef_multiplier(TefLevel::Balanced) < tef_multiplier(TefLevel::High));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_default_level_is_balanced() {
        assert_eq!(tef_multiplier(TefLevel::default()), 1.10);
    }
}
