// ABOUTME: Convert command for tdee-cli
// ABOUTME: Mass and height conversions between metric and imperial units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

use tdee_calculator::engine::units::{
    cm_to_feet_inches, cm_to_inches, feet_inches_to_cm, inches_to_cm, kg_to_lbs, lbs_to_kg,
};

use crate::ConvertCommand;

/// Print a single conversion
pub fn run(conversion: &ConvertCommand) {
    match *conversion {
        ConvertCommand::KgToLbs { value } => println!("{value} kg = {:.2} lbs", kg_to_lbs(value)),
        ConvertCommand::LbsToKg { value } => println!("{value} lbs = {:.2} kg", lbs_to_kg(value)),
        ConvertCommand::CmToIn { value } => println!("{value} cm = {:.2} in", cm_to_inches(value)),
        ConvertCommand::InToCm { value } => println!("{value} in = {:.2} cm", inches_to_cm(value)),
        ConvertCommand::FtInToCm { feet, inches } => {
            println!("{feet}'{inches}\" = {:.1} cm", feet_inches_to_cm(feet, inches));
        }
        ConvertCommand::CmToFtIn { value } => {
            let height = cm_to_feet_inches(value);
            println!("{value} cm = {}'{}\"", height.feet, height.inches);
        }
    }
}
