// ABOUTME: BMR command for tdee-cli
// ABOUTME: Reports basal metabolic rate and which formula the profile selected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use tdee_calculator::config::CalculatorConfig;
use tdee_calculator::engine::bmr::BmrFormula;
use tdee_calculator::AppResult;

use crate::helpers::display::display_bmr;
use crate::ProfileArgs;

/// Print BMR for a profile
pub fn run(config: &CalculatorConfig, profile: ProfileArgs) -> AppResult<()> {
    let profile = profile.into_document().resolve(&config.defaults)?;
    let formula = BmrFormula::for_profile(&profile);

    display_bmr(
        &formula,
        &profile,
        config.defaults.unit_system,
        config.output.round_output,
    );
    Ok(())
}
