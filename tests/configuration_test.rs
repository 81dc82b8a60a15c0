// ABOUTME: Tests for calculator configuration loading from environment variables
// ABOUTME: Verifies overrides, parse failures and validation of overridden defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serial_test::serial;
use std::env;
use tdee_calculator::config::{CalculatorConfig, ConfigError};
use tdee_calculator::models::{Gender, TefLevel, UnitSystem};
use tdee_calculator::{AppError, ErrorCode};

const ALL_VARS: [&str; 9] = [
    "TDEE_DEFAULT_GENDER",
    "TDEE_DEFAULT_AGE",
    "TDEE_DEFAULT_HEIGHT_CM",
    "TDEE_DEFAULT_WEIGHT_KG",
    "TDEE_DEFAULT_DAILY_STEPS",
    "TDEE_DEFAULT_TEF_LEVEL",
    "TDEE_DEFAULT_CALIBRATION",
    "TDEE_DEFAULT_UNIT_SYSTEM",
    "TDEE_ROUND_OUTPUT",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    common::init_test_logging();
    clear_env();

    let config = CalculatorConfig::load().unwrap();
    assert_eq!(config, CalculatorConfig::default());
    assert_eq!(config.defaults.tef_level, TefLevel::Balanced);
    assert_eq!(config.defaults.unit_system, UnitSystem::Imperial);
    assert_eq!(config.defaults.daily_steps, 8_000);
    assert!(config.output.round_output);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_env();
    env::set_var("TDEE_DEFAULT_GENDER", "female");
    env::set_var("TDEE_DEFAULT_AGE", "42");
    env::set_var("TDEE_DEFAULT_TEF_LEVEL", "high");
    env::set_var("TDEE_DEFAULT_CALIBRATION", "0.95");
    env::set_var("TDEE_DEFAULT_UNIT_SYSTEM", "metric");
    env::set_var("TDEE_DEFAULT_DAILY_STEPS", " 12000 ");
    env::set_var("TDEE_ROUND_OUTPUT", "false");

    let config = CalculatorConfig::load().unwrap();
    clear_env();

    assert_eq!(config.defaults.gender, Gender::Female);
    assert_eq!(config.defaults.age_years, 42);
    assert_eq!(config.defaults.tef_level, TefLevel::High);
    assert!((config.defaults.calibration_factor - 0.95).abs() < f64::EPSILON);
    assert_eq!(config.defaults.unit_system, UnitSystem::Metric);
    assert_eq!(config.defaults.daily_steps, 12_000);
    assert!(!config.output.round_output);
}

#[test]
#[serial]
fn test_unparseable_override_is_a_parse_error() {
    clear_env();
    env::set_var("TDEE_DEFAULT_TEF_LEVEL", "keto");

    let err = CalculatorConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("TDEE_DEFAULT_TEF_LEVEL")));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_an_env_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    env::set_var("TDEE_DEFAULT_AGE", OsStr::from_bytes(b"\xff\xfe"));

    let err = CalculatorConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::EnvVar(env::VarError::NotUnicode(_))));
    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_override_outside_limits_fails_validation() {
    clear_env();
    env::set_var("TDEE_DEFAULT_CALIBRATION", "1.5");

    let err = CalculatorConfig::load().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = CalculatorConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed: CalculatorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
