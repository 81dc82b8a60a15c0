// ABOUTME: Calculator configuration: input defaults, validation limits and output preferences
// ABOUTME: Loaded once from defaults plus environment overrides, then validated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Calculator Configuration
//!
//! Environment-only configuration. Every setting has a default; the
//! following variables override them:
//!
//! | Variable | Setting |
//! |---|---|
//! | `TDEE_DEFAULT_GENDER` | `defaults.gender` |
//! | `TDEE_DEFAULT_AGE` | `defaults.age_years` |
//! | `TDEE_DEFAULT_HEIGHT_CM` | `defaults.height_cm` |
//! | `TDEE_DEFAULT_WEIGHT_KG` | `defaults.weight_kg` |
//! | `TDEE_DEFAULT_DAILY_STEPS` | `defaults.daily_steps` |
//! | `TDEE_DEFAULT_TEF_LEVEL` | `defaults.tef_level` |
//! | `TDEE_DEFAULT_CALIBRATION` | `defaults.calibration_factor` |
//! | `TDEE_DEFAULT_UNIT_SYSTEM` | `defaults.unit_system` |
//! | `TDEE_ROUND_OUTPUT` | `output.round_output` |

/// Input defaults and output preferences
pub mod defaults;
/// Configuration error types
pub mod error;

pub use defaults::{InputDefaults, OutputConfig};
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;
use tdee_intelligence::validation::ValidationLimits;
use tracing::warn;

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Main calculator configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Values for inputs the caller leaves unset
    pub defaults: InputDefaults,
    /// Acceptance ranges applied at the input boundary
    pub limits: ValidationLimits,
    /// Presentation preferences
    pub output: OutputConfig,
}

impl CalculatorConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any limit has `min > max` or a default lies outside its limit
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, limit) in self.limits.entries() {
            if !limit.is_ordered() {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} limit has min {} greater than max {}",
                    limit.min, limit.max
                )));
            }
        }

        let defaults = &self.defaults;
        let checks = [
            (
                "calibration_factor",
                defaults.calibration_factor,
                self.limits.calibration_factor,
            ),
            (
                "daily_steps",
                f64::from(defaults.daily_steps),
                self.limits.daily_steps,
            ),
            (
                "age_years",
                f64::from(defaults.age_years),
                self.limits.age_years,
            ),
            ("height_cm", defaults.height_cm, self.limits.height_cm),
            ("weight_kg", defaults.weight_kg, self.limits.weight_kg),
        ];

        for (name, value, limit) in checks {
            if !limit.contains(value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "default {name} = {value} is outside {limit}"
                )));
            }
        }

        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    ///
    /// An unset variable leaves `target` alone; a set but non-Unicode value is an error.
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let defaults = &mut self.defaults;
        Self::apply_env_var("TDEE_DEFAULT_GENDER", &mut defaults.gender)?;
        Self::apply_env_var("TDEE_DEFAULT_AGE", &mut defaults.age_years)?;
        Self::apply_env_var("TDEE_DEFAULT_HEIGHT_CM", &mut defaults.height_cm)?;
        Self::apply_env_var("TDEE_DEFAULT_WEIGHT_KG", &mut defaults.weight_kg)?;
        Self::apply_env_var("TDEE_DEFAULT_DAILY_STEPS", &mut defaults.daily_steps)?;
        Self::apply_env_var("TDEE_DEFAULT_TEF_LEVEL", &mut defaults.tef_level)?;
        Self::apply_env_var("TDEE_DEFAULT_CALIBRATION", &mut defaults.calibration_factor)?;
        Self::apply_env_var("TDEE_DEFAULT_UNIT_SYSTEM", &mut defaults.unit_system)?;

        Self::apply_env_var("TDEE_ROUND_OUTPUT", &mut self.output.round_output)?;

        Ok(self)
    }
}
