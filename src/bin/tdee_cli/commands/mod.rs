// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors
// ABOUTME: Re-exports command modules for tdee-cli
// ABOUTME: Provides access to calculate, bmr, zones, convert and validate commands

pub mod bmr;
pub mod calculate;
pub mod convert;
pub mod validate;
pub mod zones;
