// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors
// ABOUTME: Output formatting helpers for tdee-cli
// ABOUTME: Renders breakdowns, formula derivations, zone tables and validation reports

use serde::Serialize;
use tdee_calculator::calculator::Calculation;
use tdee_calculator::engine::bmr::BmrFormula;
use tdee_calculator::engine::heart_rate::{
    average_heart_rate, max_heart_rate, zone_calories, zone_midpoint,
};
use tdee_calculator::engine::lifting::lifting_met;
use tdee_calculator::engine::neat::stride_length_cm;
use tdee_calculator::engine::units::{cm_to_feet_inches, kg_to_lbs};
use tdee_calculator::engine::validation::ValidationReport;
use tdee_calculator::models::{HeartRateZone, Profile, UnitSystem};
use tdee_calculator::AppResult;

/// Format an energy value, rounded to whole kcal or to one decimal
pub fn format_kcal(value: f64, round: bool) -> String {
    if round {
        format!("{value:.0} kcal")
    } else {
        format!("{value:.1} kcal")
    }
}

/// Body measurements in the caller's preferred units
pub fn format_profile(profile: &Profile, units: UnitSystem) -> String {
    let body = match units {
        UnitSystem::Metric => format!("{:.1} cm, {:.1} kg", profile.height_cm, profile.weight_kg),
        UnitSystem::Imperial => {
            let height = cm_to_feet_inches(profile.height_cm);
            format!(
                "{}'{}\", {:.1} lbs",
                height.feet,
                height.inches,
                kg_to_lbs(profile.weight_kg)
            )
        }
    };

    let body_fat = profile
        .body_fat_percent
        .map_or_else(String::new, |bf| format!(", {bf:.1}% body fat"));

    format!(
        "{}, {} years, {body}{body_fat}",
        profile.gender, profile.age_years
    )
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a full daily breakdown
pub fn display_calculation(calculation: &Calculation, units: UnitSystem, round: bool) {
    let breakdown = &calculation.breakdown;
    let shares = &calculation.shares;
    let kcal = |value: f64| format_kcal(value, round);

    println!("\nTDEE Breakdown");
    println!("{}", "=".repeat(50));
    println!("Profile: {}", format_profile(&calculation.inputs.profile, units));
    println!(
        "BMR ({}): {} ({:.0}%)",
        breakdown.bmr_formula.name(),
        kcal(breakdown.bmr),
        shares.bmr_percent
    );
    println!(
        "Exercise: {} ({:.0}%)",
        kcal(breakdown.exercise_kcal),
        shares.exercise_percent
    );

    let profile = &calculation.inputs.profile;
    for activity in &calculation.inputs.activities {
        let energy = zone_calories(
            profile.gender,
            profile.age_years,
            profile.weight_kg,
            activity.zone,
            activity.duration_minutes,
        );
        let name = activity
            .name
            .as_deref()
            .map_or_else(String::new, |name| format!(" \"{name}\""));
        println!(
            "  {} ({}), {:.0} min{name}: {}",
            activity.zone,
            activity.zone.label(),
            activity.duration_minutes,
            kcal(energy)
        );
    }
    if let Some(lifting) = calculation
        .inputs
        .lifting
        .filter(|session| session.duration_minutes > 0.0)
    {
        println!(
            "  Lifting ({}), {:.0} min: {}",
            lifting.intensity,
            lifting.duration_minutes,
            kcal(breakdown.lifting_kcal)
        );
    }

    println!(
        "NEAT ({:.0} of {} steps after cardio): {} ({:.0}%)",
        breakdown.neat_steps,
        calculation.inputs.daily_steps,
        kcal(breakdown.neat_kcal),
        shares.neat_percent
    );
    println!("{}", "-".repeat(50));
    println!("Base: {}", kcal(breakdown.base_tdee));
    println!(
        "TEF ({}, x{:.2}): +{}",
        breakdown.tef_level.description(),
        breakdown.tef_multiplier,
        kcal(breakdown.tef_kcal)
    );
    println!("Calibration: x{:.2}", breakdown.calibration_factor);
    println!("{}", "=".repeat(50));
    println!("TDEE: {}/day", kcal(breakdown.tdee));

    if !calculation.validation.is_valid() {
        println!(
            "\nWARNING {} input(s) outside the accepted ranges:",
            calculation.validation.issues.len()
        );
        for issue in &calculation.validation.issues {
            println!("  - {issue}");
        }
    }
}

/// Display the formula derivation of every component
pub fn display_explanation(calculation: &Calculation) {
    let breakdown = &calculation.breakdown;
    let inputs = &calculation.inputs;
    let profile = &inputs.profile;

    println!("\nHow this was calculated");
    println!("{}", "=".repeat(50));

    for line in breakdown.bmr_formula.describe() {
        println!("{line}");
    }

    let max_hr = max_heart_rate(profile.age_years);
    for activity in &inputs.activities {
        let average = average_heart_rate(activity.zone, profile.age_years);
        println!(
            "{}: {:.0}% of max HR {max_hr:.0} = {average:.1} bpm for {:.0} min (Keytel)",
            activity.zone,
            zone_midpoint(activity.zone) * 100.0,
            activity.duration_minutes
        );
    }

    if let Some(lifting) = inputs.lifting.filter(|session| session.duration_minutes > 0.0) {
        println!(
            "Lifting = {:.1} MET x {:.1} kg x {:.2} h x 1.10 EPOC = {:.0} kcal",
            lifting_met(lifting.intensity),
            profile.weight_kg,
            lifting.duration_minutes / 60.0,
            breakdown.lifting_kcal
        );
    }

    println!(
        "NEAT steps = {} - {:.0} cardio steps = {:.0}",
        inputs.daily_steps, breakdown.cardio_steps, breakdown.neat_steps
    );
    println!(
        "NEAT = {:.0} steps x {:.1} cm stride at 4.8 km/h, 3.5 MET = {:.0} kcal",
        breakdown.neat_steps,
        stride_length_cm(profile.height_cm),
        breakdown.neat_kcal
    );
    println!(
        "TDEE = ({:.0} + {:.0} + {:.0}) x {:.2} x {:.2} = {:.0} kcal",
        breakdown.bmr,
        breakdown.exercise_kcal,
        breakdown.neat_kcal,
        breakdown.tef_multiplier,
        breakdown.calibration_factor,
        breakdown.tdee
    );
}

/// Display BMR and its derivation
pub fn display_bmr(formula: &BmrFormula, profile: &Profile, units: UnitSystem, round: bool) {
    println!("\nBasal Metabolic Rate");
    println!("{}", "=".repeat(50));
    println!("Profile: {}", format_profile(profile, units));
    println!("Formula: {}", formula.name());
    println!("BMR: {}/day", format_kcal(formula.evaluate(), round));
    println!();
    for line in formula.describe() {
        println!("  {line}");
    }
}

/// Display heart rate and energy for every zone
pub fn display_zones(profile: &Profile, minutes: f64, round: bool) {
    println!(
        "\nHeart rate zones (age {}, max HR {:.0} bpm)",
        profile.age_years,
        max_heart_rate(profile.age_years)
    );
    println!("{}", "=".repeat(60));
    println!(
        "{:<8} {:<12} {:>6} {:>10} {:>18}",
        "Zone",
        "Label",
        "% max",
        "avg bpm",
        format!("{minutes:.0} min energy")
    );
    for zone in HeartRateZone::ALL {
        let energy = zone_calories(
            profile.gender,
            profile.age_years,
            profile.weight_kg,
            zone,
            minutes,
        );
        println!(
            "{:<8} {:<12} {:>5.0}% {:>10.1} {:>18}",
            zone.to_string(),
            zone.label(),
            zone_midpoint(zone) * 100.0,
            average_heart_rate(zone, profile.age_years),
            format_kcal(energy, round)
        );
    }
}

/// Display a validation report
pub fn display_validation(report: &ValidationReport) {
    if report.is_valid() {
        println!("Success All inputs are within the accepted ranges");
        return;
    }

    println!("Error {} input(s) outside the accepted ranges:", report.issues.len());
    for issue in &report.issues {
        println!("  - {issue}");
    }
}
