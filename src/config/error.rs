// ABOUTME: Configuration error types for calculator configuration loading and validation
// ABOUTME: Defines error variants for invalid ranges, environment parsing, and out-of-range defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Configuration error types.

use std::env;
use tdee_core::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Limit bounds are not ordered (min greater than max)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse a configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// A default value falls outside its own validation limit
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::config_invalid(error.to_string())
            }
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => Self::config(error.to_string()),
        }
    }
}
