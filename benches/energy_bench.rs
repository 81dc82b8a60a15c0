// ABOUTME: Criterion benchmarks for the energy expenditure engine
// ABOUTME: Measures BMR selection, zone estimation and full daily composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TDEE Calculator Contributors

//! Criterion benchmarks for the calculation engine.
//!
//! The whole pipeline reruns on every input change, so full-day composition
//! is the number that matters.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tdee_calculator::calculator::{TdeeCalculator, ValidationMode};
use tdee_calculator::config::CalculatorConfig;
use tdee_calculator::engine::{bmr, calculate_daily_energy, zone_calories};
use tdee_calculator::models::{
    CardioActivity, DailyInputs, Gender, HeartRateZone, LiftingIntensity, LiftingSession, Profile,
};

/// A day with `activity_count` cardio sessions cycling through the zones
fn training_day(activity_count: usize) -> DailyInputs {
    let mut inputs = DailyInputs::new(Profile::new(Gender::Female, 35, 165.0, 60.0))
        .with_steps(12_000)
        .with_lifting(LiftingSession {
            intensity: LiftingIntensity::Vigorous,
            duration_minutes: 45.0,
        });

    for index in 0..activity_count {
        let zone = HeartRateZone::ALL[index % HeartRateZone::ALL.len()];
        inputs = inputs.with_activity(CardioActivity::new(zone, 20.0 + (index % 4) as f64 * 10.0));
    }
    inputs
}

fn bench_bmr(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmr");

    group.bench_function("mifflin_st_jeor", |b| {
        b.iter(|| {
            bmr(
                black_box(Gender::Male),
                black_box(30),
                black_box(178.0),
                black_box(82.0),
                None,
            )
        });
    });
    group.bench_function("katch_mcardle", |b| {
        b.iter(|| {
            bmr(
                black_box(Gender::Male),
                black_box(30),
                black_box(178.0),
                black_box(80.0),
                black_box(Some(20.0)),
            )
        });
    });

    group.finish();
}

fn bench_zone_calories(c: &mut Criterion) {
    c.bench_function("zone_calories_all_zones", |b| {
        b.iter(|| {
            HeartRateZone::ALL
                .iter()
                .map(|zone| zone_calories(Gender::Male, 30, 82.0, black_box(*zone), 45.0))
                .sum::<f64>()
        });
    });
}

fn bench_daily_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_energy");

    for count in [0_usize, 3, 20] {
        let inputs = training_day(count);
        group.throughput(Throughput::Elements(count as u64 + 1));
        group.bench_with_input(
            BenchmarkId::new("calculate_daily_energy", count),
            &inputs,
            |b, inputs| b.iter(|| calculate_daily_energy(black_box(inputs))),
        );
    }

    let calculator = TdeeCalculator::new(CalculatorConfig::default());
    let inputs = training_day(3);
    group.bench_function("calculator_with_validation", |b| {
        b.iter(|| calculator.calculate(black_box(inputs.clone()), ValidationMode::Warn));
    });

    group.finish();
}

criterion_group!(benches, bench_bmr, bench_zone_calories, bench_daily_energy);
criterion_main!(benches);
