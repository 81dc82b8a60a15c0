// ABOUTME: Validate command for tdee-cli
// ABOUTME: Checks an input document against the configured ranges, failing when any is violated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use std::path::Path;
use tdee_calculator::calculator::TdeeCalculator;
use tdee_calculator::config::CalculatorConfig;
use tdee_calculator::input::InputDocument;
use tdee_calculator::AppResult;
use tracing::info;

use crate::helpers::display::{display_validation, print_json};
use crate::OutputFormat;

/// Validate a document; returns an error when any input is out of range
pub fn run(config: &CalculatorConfig, input: &Path, format: OutputFormat) -> AppResult<()> {
    let resolved = InputDocument::load(input)?.resolve(&config.defaults)?;
    let report = TdeeCalculator::new(config.clone()).validate(&resolved.inputs);
    info!(issues = report.issues.len(), "Input document validated");

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => display_validation(&report),
    }

    report.into_result()
}
