// ABOUTME: Criterion benchmarks for the gas planning calculations
// ABOUTME: Measures SCR, single gas plans, plan sweeps across depths and MOD tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for gas planning.
//!
//! A front end recomputes the whole plan on every keystroke, so these track
//! the cost of one plan and of a full depth sweep.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dive_gas_planner::mix::get_mod;
use dive_gas_planner::planning::{calc_gas_plan, calc_scr, calc_team_turn_pressures};
use dive_gas_planner::planning::{GasPlanInput, ScrInput};
use dive_gas_planner::{GasStrategy, UnitSystem, STANDARD_GASES, TANKS};

/// Deepest depth in the sweep (ft)
const SWEEP_MAX_DEPTH_FT: u32 = 200;

fn plan_input(depth: f64, gas_strategy: GasStrategy, unit_system: UnitSystem) -> GasPlanInput {
    GasPlanInput {
        depth,
        scr: 0.6,
        start_pressure: 3000.0,
        tank: TANKS[6].clone(),
        gas_strategy,
        unit_system,
    }
}

fn bench_scr(c: &mut Criterion) {
    let mut group = c.benchmark_group("scr");

    for unit_system in [UnitSystem::Imperial, UnitSystem::Metric] {
        let input = ScrInput {
            start_psi: Some(3000.0),
            end_psi: Some(1000.0),
            time: Some(50.0),
            depth: Some(20.0),
            tank_factor: 5.0,
            unit_system,
        };
        group.bench_with_input(
            BenchmarkId::new("calc_scr", unit_system.name()),
            &input,
            |b, input| b.iter(|| calc_scr(black_box(input))),
        );
    }

    group.finish();
}

fn bench_gas_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("gas_plan");

    for strategy in GasStrategy::ALL {
        let input = plan_input(100.0, strategy, UnitSystem::Imperial);
        group.bench_with_input(
            BenchmarkId::new("single_plan", strategy.name()),
            &input,
            |b, input| b.iter(|| calc_gas_plan(black_box(input))),
        );
    }

    let sweep: Vec<GasPlanInput> = (0..=SWEEP_MAX_DEPTH_FT)
        .map(|depth| plan_input(f64::from(depth), GasStrategy::Third, UnitSystem::Imperial))
        .collect();
    group.throughput(Throughput::Elements(sweep.len() as u64));
    group.bench_function("depth_sweep", |b| {
        b.iter(|| {
            for input in black_box(&sweep) {
                black_box(calc_gas_plan(input));
            }
        });
    });

    group.finish();
}

fn bench_mod_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("mod");

    group.bench_function("standard_gases_both_limits", |b| {
        b.iter(|| {
            for gas in &STANDARD_GASES {
                for ppo2 in [1.4, 1.6] {
                    black_box(get_mod(black_box(gas.o2_percent), ppo2, UnitSystem::Metric));
                }
            }
        });
    });

    group.finish();
}

fn bench_team_plan(c: &mut Criterion) {
    let pressures = [3000.0, 2800.0, 3100.0, 2950.0];
    c.bench_function("team_turn_pressures", |b| {
        b.iter(|| calc_team_turn_pressures(black_box(&pressures)));
    });
}

criterion_group!(
    benches,
    bench_scr,
    bench_gas_plan,
    bench_mod_table,
    bench_team_plan,
);
criterion_main!(benches);
