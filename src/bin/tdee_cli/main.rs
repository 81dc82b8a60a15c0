// ABOUTME: tdee-cli - command-line front end for the TDEE calculator
// ABOUTME: Calculates TDEE, BMR and zone energies, converts units and validates input documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors
//!
//! Usage:
//! ```bash
//! # Full calculation from flags (unset values come from configured defaults)
//! tdee-cli calculate --gender female --age 35 --height-ft 5 --height-in 6 --weight-lbs 140 \
//!     --steps 9000 --activity 3:45:"Morning run" --lifting vigorous:60 --tef high
//!
//! # Calculation from a JSON document, with the formula derivation
//! tdee-cli calculate --input day.json --explain
//!
//! # Machine-readable output, refusing out-of-range inputs
//! tdee-cli calculate --input day.json --format json --strict
//!
//! # BMR only
//! tdee-cli bmr --weight-kg 80 --body-fat 20
//!
//! # Heart rate and energy per zone
//! tdee-cli zones --age 40 --weight-kg 70 --minutes 30
//!
//! # Unit conversions
//! tdee-cli convert ft-in-to-cm 5 10
//!
//! # Check a document against the accepted ranges
//! tdee-cli validate --input day.json
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tdee_calculator::config::CalculatorConfig;
use tdee_calculator::input::ProfileDocument;
use tdee_calculator::logging::LoggingConfig;
use tdee_calculator::models::{CardioActivity, Gender, LiftingSession, TefLevel, UnitSystem};
use tracing::debug;

use helpers::parse::{parse_activity, parse_lifting};

#[derive(Parser)]
#[command(
    name = "tdee-cli",
    version,
    about = "Total Daily Energy Expenditure calculator",
    long_about = "Estimates daily energy expenditure from BMR, heart-rate zone exercise, lifting, \
                  step-based NEAT and the thermic effect of food."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate TDEE for a day
    Calculate(CalculateArgs),

    /// Calculate basal metabolic rate only
    Bmr {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Show average heart rate and energy for each zone
    Zones {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Minutes spent in each zone
        #[arg(long, default_value = "60")]
        minutes: f64,
    },

    /// Convert between metric and imperial units
    Convert {
        #[command(subcommand)]
        conversion: ConvertCommand,
    },

    /// Check an input document against the accepted ranges
    Validate {
        /// JSON input document
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Body measurement flags shared by several subcommands
#[derive(Args, Debug, Clone, Default)]
struct ProfileArgs {
    /// Biological sex (male, female)
    #[arg(long)]
    gender: Option<Gender>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Height in centimeters
    #[arg(long, conflicts_with_all = ["height_ft", "height_in"])]
    height_cm: Option<f64>,

    /// Height, feet part
    #[arg(long)]
    height_ft: Option<f64>,

    /// Height, inches part
    #[arg(long)]
    height_in: Option<f64>,

    /// Weight in kilograms
    #[arg(long, conflicts_with = "weight_lbs")]
    weight_kg: Option<f64>,

    /// Weight in pounds
    #[arg(long)]
    weight_lbs: Option<f64>,

    /// Body fat percentage (selects Katch-McArdle)
    #[arg(long)]
    body_fat: Option<f64>,
}

impl ProfileArgs {
    fn into_document(self) -> ProfileDocument {
        ProfileDocument {
            gender: self.gender,
            age_years: self.age,
            height_cm: self.height_cm,
            height_feet: self.height_ft,
            height_inches: self.height_in,
            weight_kg: self.weight_kg,
            weight_lbs: self.weight_lbs,
            body_fat_percent: self.body_fat,
        }
    }
}

#[derive(Args, Debug)]
struct CalculateArgs {
    /// JSON input document; flags override its fields
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    #[command(flatten)]
    profile: ProfileArgs,

    /// Raw daily step count (including steps taken during cardio)
    #[arg(long)]
    steps: Option<u32>,

    /// Cardio session as ZONE:MINUTES[:NAME], repeatable
    #[arg(long = "activity", value_parser = parse_activity)]
    activities: Vec<CardioActivity>,

    /// Lifting session as [INTENSITY:]MINUTES (moderate, vigorous)
    #[arg(long, value_parser = parse_lifting)]
    lifting: Option<LiftingSession>,

    /// Thermic effect of food level (low, balanced, high)
    #[arg(long)]
    tef: Option<TefLevel>,

    /// Personal calibration factor (0.85-1.15)
    #[arg(long)]
    calibration: Option<f64>,

    /// Display units (imperial, metric)
    #[arg(long)]
    units: Option<UnitSystem>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the formula derivation for each component
    #[arg(long)]
    explain: bool,

    /// Refuse out-of-range inputs instead of warning
    #[arg(long)]
    strict: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ConvertCommand {
    /// Kilograms to pounds
    KgToLbs { value: f64 },
    /// Pounds to kilograms
    LbsToKg { value: f64 },
    /// Centimeters to inches
    CmToIn { value: f64 },
    /// Inches to centimeters
    InToCm { value: f64 },
    /// Feet and inches to centimeters
    FtInToCm { feet: f64, inches: f64 },
    /// Centimeters to feet and inches
    CmToFtIn { value: f64 },
}

/// Output format for results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = CalculatorConfig::global();
    debug!(?config, "Calculator configuration loaded");

    match cli.command {
        Command::Calculate(args) => commands::calculate::run(config, args)?,
        Command::Bmr { profile } => commands::bmr::run(config, profile)?,
        Command::Zones { profile, minutes } => commands::zones::run(config, profile, minutes)?,
        Command::Convert { conversion } => commands::convert::run(&conversion),
        Command::Validate { input, format } => commands::validate::run(config, &input, format)?,
    }

    Ok(())
}
