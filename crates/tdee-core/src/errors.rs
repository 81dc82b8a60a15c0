// ABOUTME: Unified error type and error codes for the TDEE calculator
// ABOUTME: Errors arise only at input boundaries; the formulas themselves are infallible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! # Unified Error Handling
//!
//! The calculation engine is total over its numeric domain and never fails.
//! Errors in this workspace come from the boundary around it: parsing
//! categorical values from text, decoding caller input documents, loading
//! configuration, and strict validation of out-of-range input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input could not be interpreted (unknown category, non-numeric text)
    InvalidInput = 3000,
    /// Input document is not well-formed
    InvalidFormat = 3002,
    /// A numeric input lies outside its acceptance range
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration could not be loaded or is inconsistent
    ConfigError = 6000,
    /// Configuration value failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Serialization or deserialization of a document failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Numeric code for this error, grouped by category
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The input format is invalid",
            Self::ValueOutOfRange => "A value is outside the accepted range",
            Self::ConfigError => "Configuration error",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Failed to serialize or deserialize data",
        }
    }
}

/// Application error carrying a stable code and a human-readable message
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error category
    pub code: ErrorCode,
    /// Detailed message for the caller
    pub message: String,
    /// Structured details (e.g. the list of out-of-range fields)
    pub details: serde_json::Value,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    /// Attach structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its acceptance range
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration loaded but inconsistent
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_syntax() || error.is_eof() {
            Self::new(ErrorCode::InvalidFormat, error.to_string())
        } else {
            Self::serialization(error.to_string())
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::invalid_input("Unknown TEF level: 'keto'");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: Unknown TEF level: 'keto'"
        );
    }

    #[test]
    fn test_codes_are_grouped_by_category() {
        assert_eq!(ErrorCode::ValueOutOfRange.as_u16(), 3003);
        assert_eq!(ErrorCode::ConfigError.as_u16(), 6000);
    }

    #[test]
    fn test_syntax_errors_map_to_invalid_format() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let error = AppError::from(parse_error);
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }
}
