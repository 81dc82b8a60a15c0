// ABOUTME: Tests for loading caller input documents and resolving them into engine inputs
// ABOUTME: Covers file loading, imperial conversion, flag overlays and malformed documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging, write_input_document};
use std::path::Path;
use tdee_calculator::calculator::{TdeeCalculator, ValidationMode};
use tdee_calculator::config::{CalculatorConfig, InputDefaults};
use tdee_calculator::input::{InputDocument, ProfileDocument};
use tdee_calculator::models::{Gender, HeartRateZone, LiftingIntensity, TefLevel, UnitSystem};
use tdee_calculator::ErrorCode;

const TRAINING_DAY: &str = r#"{
    "units": "imperial",
    "profile": {
        "gender": "female",
        "age_years": 35,
        "height_feet": 5,
        "height_inches": 6,
        "weight_lbs": 140
    },
    "daily_steps": 9000,
    "activities": [
        { "zone": 3, "duration_minutes": 45, "name": "Morning run" },
        { "zone": 1, "duration_minutes": 20 }
    ],
    "lifting": { "intensity": "vigorous", "duration_minutes": 60 },
    "tef_level": "high",
    "calibration_factor": 1.05
}"#;

#[test]
fn test_load_training_day_document() {
    init_test_logging();
    let file = write_input_document(TRAINING_DAY);

    let resolved = InputDocument::load(file.path())
        .unwrap()
        .resolve(&InputDefaults::default())
        .unwrap();
    let inputs = &resolved.inputs;

    assert_eq!(resolved.units, UnitSystem::Imperial);
    assert_eq!(inputs.profile.gender, Gender::Female);
    assert_close(inputs.profile.height_cm, 167.64, 1e-9);
    assert_close(inputs.profile.weight_kg, 63.502_88, 1e-9);
    assert_eq!(inputs.activities.len(), 2);
    assert_eq!(inputs.activities[0].zone, HeartRateZone::Zone3);
    assert_eq!(inputs.activities[0].name.as_deref(), Some("Morning run"));
    assert_eq!(
        inputs.lifting.map(|l| l.intensity),
        Some(LiftingIntensity::Vigorous)
    );
    assert_eq!(inputs.tef_level, TefLevel::High);
}

#[test]
fn test_document_calculates_end_to_end() {
    let file = write_input_document(TRAINING_DAY);
    let config = CalculatorConfig::default();
    let resolved = InputDocument::load(file.path())
        .unwrap()
        .resolve(&config.defaults)
        .unwrap();

    let result = TdeeCalculator::new(config)
        .calculate(resolved.inputs, ValidationMode::Strict)
        .unwrap();

    assert!(result.validation.is_valid());
    assert!(result.breakdown.lifting_kcal > 0.0);
    assert!(result.breakdown.tdee > result.breakdown.base_tdee);
}

#[test]
fn test_flags_override_document_fields() {
    let base = InputDocument::from_json(TRAINING_DAY).unwrap();
    let flags = InputDocument {
        profile: ProfileDocument {
            height_cm: Some(170.0),
            ..ProfileDocument::default()
        },
        daily_steps: Some(4_000),
        tef_level: Some(TefLevel::Low),
        ..InputDocument::default()
    };

    let inputs = base
        .overlay(flags)
        .resolve(&InputDefaults::default())
        .unwrap()
        .inputs;

    assert_close(inputs.profile.height_cm, 170.0, 1e-12);
    assert_eq!(inputs.daily_steps, 4_000);
    assert_eq!(inputs.tef_level, TefLevel::Low);
    assert_eq!(inputs.activities.len(), 2);
}

#[test]
fn test_height_inches_without_feet_is_rejected() {
    let doc = InputDocument::from_json(r#"{"profile": {"height_inches": 6}}"#).unwrap();
    let err = doc.resolve(&InputDefaults::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("height_feet"));
}

#[test]
fn test_height_feet_alone_means_zero_inches() {
    let inputs = InputDocument::from_json(r#"{"profile": {"height_feet": 6}}"#)
        .unwrap()
        .resolve(&InputDefaults::default())
        .unwrap()
        .inputs;
    assert_close(inputs.profile.height_cm, 182.88, 1e-9);
}

#[test]
fn test_zone_outside_one_to_five_is_rejected() {
    let err = InputDocument::from_json(r#"{"activities": [{"zone": 6, "duration_minutes": 30}]}"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_non_numeric_value_is_rejected_before_the_engine() {
    let err = InputDocument::from_json(r#"{"daily_steps": "lots"}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_truncated_json_is_invalid_format() {
    let err = InputDocument::from_json(r#"{"profile": {"age_years": 30"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_missing_file_is_invalid_input() {
    let err = InputDocument::load(Path::new("/nonexistent/day.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("day.json"));
}
