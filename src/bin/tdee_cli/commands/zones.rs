// ABOUTME: Zones command for tdee-cli
// ABOUTME: Tabulates average heart rate and energy cost for each of the five zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use tdee_calculator::config::CalculatorConfig;
use tdee_calculator::AppResult;
use tracing::warn;

use crate::helpers::display::display_zones;
use crate::ProfileArgs;

/// Print the zone table for a profile
pub fn run(config: &CalculatorConfig, profile: ProfileArgs, minutes: f64) -> AppResult<()> {
    let profile = profile.into_document().resolve(&config.defaults)?;

    let limit = config.limits.duration_minutes;
    if !limit.contains(minutes) {
        warn!(minutes, "Duration outside accepted range {}", limit);
    }

    display_zones(&profile, minutes, config.output.round_output);
    Ok(())
}
