// ABOUTME: Calculate command for tdee-cli
// ABOUTME: Builds a day from an input document and flags, then prints the TDEE breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use tdee_calculator::calculator::{TdeeCalculator, ValidationMode};
use tdee_calculator::config::CalculatorConfig;
use tdee_calculator::input::InputDocument;
use tdee_calculator::AppResult;
use tracing::info;

use crate::helpers::display::{display_calculation, display_explanation, print_json};
use crate::{CalculateArgs, OutputFormat};

/// Run a full calculation
pub fn run(config: &CalculatorConfig, args: CalculateArgs) -> AppResult<()> {
    let base = match &args.input {
        Some(path) => InputDocument::load(path)?,
        None => InputDocument::default(),
    };

    let flags = InputDocument {
        units: args.units,
        profile: args.profile.into_document(),
        daily_steps: args.steps,
        activities: args.activities,
        lifting: args.lifting,
        tef_level: args.tef,
        calibration_factor: args.calibration,
    };

    let resolved = base.overlay(flags).resolve(&config.defaults)?;
    let mode = if args.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Warn
    };

    let calculation = TdeeCalculator::new(config.clone()).calculate(resolved.inputs, mode)?;
    info!(
        tdee = calculation.breakdown.tdee,
        formula = calculation.breakdown.bmr_formula.name(),
        "TDEE calculated"
    );

    match args.format {
        OutputFormat::Json => print_json(&calculation)?,
        OutputFormat::Text => {
            display_calculation(&calculation, resolved.units, config.output.round_output);
            if args.explain {
                display_explanation(&calculation);
            }
        }
    }

    Ok(())
}
