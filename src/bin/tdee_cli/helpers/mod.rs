// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors
// ABOUTME: Re-exports helper modules for tdee-cli
// ABOUTME: Provides access to flag parsers and display formatting utilities

pub mod display;
pub mod parse;
