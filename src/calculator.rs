// ABOUTME: Calculator service applying boundary validation before composing a day's TDEE
// ABOUTME: Out-of-range inputs are logged as warnings, or refused in strict mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use crate::config::CalculatorConfig;
use serde::{Deserialize, Serialize};
use tdee_core::models::DailyInputs;
use tdee_core::AppResult;
use tdee_intelligence::composer::{calculate_daily_energy, ComponentShares, EnergyBreakdown};
use tdee_intelligence::validation::{validate_inputs, ValidationReport};
use tracing::{debug, warn};

/// How out-of-range inputs are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Log each issue and calculate anyway
    #[default]
    Warn,
    /// Refuse to calculate
    Strict,
}

/// Result of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Inputs the result was computed from
    pub inputs: DailyInputs,
    /// Every intermediate and final value
    pub breakdown: EnergyBreakdown,
    /// Component percentages of the pre-TEF total
    pub shares: ComponentShares,
    /// Validation issues found (empty when all inputs were in range)
    pub validation: ValidationReport,
}

/// Entry point for callers: validates at the boundary, then composes
#[derive(Debug, Clone)]
pub struct TdeeCalculator {
    config: CalculatorConfig,
}

impl Default for TdeeCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::global().clone())
    }
}

impl TdeeCalculator {
    /// Create a calculator with an explicit configuration
    #[must_use]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Check every input against the configured limits
    #[must_use]
    pub fn validate(&self, inputs: &DailyInputs) -> ValidationReport {
        validate_inputs(inputs, &self.config.limits)
    }

    /// Validate and compose a day's energy expenditure
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` in [`ValidationMode::Strict`] when any input
    /// is outside its configured limit
    pub fn calculate(&self, inputs: DailyInputs, mode: ValidationMode) -> AppResult<Calculation> {
        let validation = self.validate(&inputs);

        if mode == ValidationMode::Strict {
            validation.clone().into_result()?;
        }
        for issue in &validation.issues {
            warn!(
                field = %issue.field,
                value = issue.value,
                "Input outside accepted range {}, result may not be physiological",
                issue.limit
            );
        }

        let breakdown = calculate_daily_energy(&inputs);
        debug!(
            tdee = breakdown.tdee,
            issues = validation.issues.len(),
            "Calculation complete"
        );

        Ok(Calculation {
            shares: breakdown.shares(),
            inputs,
            breakdown,
            validation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdee_core::models::{Gender, Profile};
    use tdee_core::ErrorCode;

    fn calculator() -> TdeeCalculator {
        TdeeCalculator::new(CalculatorConfig::default())
    }

    #[test]
    fn test_warn_mode_still_calculates() {
        let inputs = DailyInputs::new(Profile::new(Gender::Male, 12, 150.0, 40.0));
        let result = calculator()
            .calculate(inputs, ValidationMode::Warn)
            .unwrap();

        assert_eq!(result.validation.fields(), vec!["age_years"]);
        assert!(result.breakdown.tdee > 0.0);
    }

    #[test]
    fn test_strict_mode_refuses_out_of_range() {
        let inputs = DailyInputs::new(Profile::new(Gender::Female, 30, 165.0, 60.0))
            .with_calibration(0.5);
        let err = calculator()
            .calculate(inputs, ValidationMode::Strict)
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(err.message.contains("calibration_factor"));
    }

    #[test]
    fn test_shares_accompany_breakdown() {
        let inputs =
            DailyInputs::new(Profile::new(Gender::Male, 30, 178.0, 82.0)).with_steps(8_000);
        let result = calculator()
            .calculate(inputs, ValidationMode::Strict)
            .unwrap();

        assert_eq!(result.shares, result.breakdown.shares());
        assert!(result.validation.is_valid());
    }
}
