// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors
// ABOUTME: Command-line value parsers for cardio and lifting session flags
// ABOUTME: Parses ZONE:MINUTES[:NAME] and [INTENSITY:]MINUTES shorthands

use tdee_calculator::models::{CardioActivity, HeartRateZone, LiftingIntensity, LiftingSession};

fn parse_minutes(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid duration in minutes: '{value}'"))
}

/// Parse `ZONE:MINUTES[:NAME]`, e.g. `3:45` or `z2:60:Evening ride`
pub fn parse_activity(value: &str) -> Result<CardioActivity, String> {
    let mut parts = value.splitn(3, ':');
    let (Some(zone), Some(minutes)) = (parts.next(), parts.next()) else {
        return Err(format!(
            "Invalid activity '{value}': expected ZONE:MINUTES[:NAME]"
        ));
    };

    let zone = zone
        .parse::<HeartRateZone>()
        .map_err(|e| e.to_string())?;
    let activity = CardioActivity::new(zone, parse_minutes(minutes)?);

    Ok(match parts.next().map(str::trim) {
        Some(name) if !name.is_empty() => activity.named(name),
        _ => activity,
    })
}

/// Parse `[INTENSITY:]MINUTES`, e.g. `60` or `vigorous:45`
pub fn parse_lifting(value: &str) -> Result<LiftingSession, String> {
    let (intensity, minutes) = match value.split_once(':') {
        Some((intensity, minutes)) => (
            intensity
                .parse::<LiftingIntensity>()
                .map_err(|e| e.to_string())?,
            minutes,
        ),
        None => (LiftingIntensity::default(), value),
    };

    Ok(LiftingSession {
        intensity,
        duration_minutes: parse_minutes(minutes)?,
    })
}
