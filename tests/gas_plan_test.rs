// ABOUTME: Integration tests for single-diver gas plans across strategies and unit systems
// ABOUTME: Checks minimum gas, turn pressure and durations against worked cave and open-water plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, imperial_plan, init_test_logging};
use dive_gas_planner::planning::{calc_gas_plan, GasPlanInput, PlanResult};
use dive_gas_planner::units::to_display_pressure;
use dive_gas_planner::{find_tank, GasStrategy, Tank, UnitSystem};

// === Minimum Gas ===

#[test]
fn test_min_gas_double_hp100_at_100_feet() {
    init_test_logging();
    let input = imperial_plan("Double HP100", 100.0, 0.75, 3400.0, GasStrategy::All);
    let plan = calc_gas_plan(&input);

    assert_eq!(plan.min_gas_psi, 700.0);
    assert_close(plan.min_gas_vol, 41.5, 1e-9);
    assert_eq!(plan.usable_psi, 2700.0);
    assert_eq!(plan.turn_pressure, 700.0);
    assert_close(plan.expected_time_max, 53.59, 0.01);
    assert_close(plan.expected_time_avg, 85.88, 0.01);
}

#[test]
fn test_min_gas_never_below_floor() {
    let plan = calc_gas_plan(&imperial_plan(
        "Double HP100",
        20.0,
        0.5,
        3400.0,
        GasStrategy::All,
    ));
    assert_eq!(plan.min_gas_psi, 500.0);
    assert_close(plan.min_gas_vol, 3.909, 0.001);
}

#[test]
fn test_min_gas_is_rounded_up_to_100_psi() {
    // 41.5 cu ft on an AL80 is 1660 psi
    let plan = calc_gas_plan(&imperial_plan("AL80", 100.0, 0.75, 3000.0, GasStrategy::All));
    assert_eq!(plan.min_gas_psi, 1700.0);
    assert_eq!(plan.min_gas_psi % 100.0, 0.0);
}

#[test]
fn test_min_gas_independent_of_strategy() {
    for strategy in GasStrategy::ALL {
        let plan = calc_gas_plan(&imperial_plan("AL80", 100.0, 0.75, 3000.0, strategy));
        assert_eq!(plan.min_gas_psi, 1700.0, "strategy {strategy}");
        assert_eq!(plan.usable_psi, 1300.0, "strategy {strategy}");
    }
}

// === Strategies ===

#[test]
fn test_all_usable_turns_at_min_gas() {
    let plan = calc_gas_plan(&imperial_plan("AL80", 100.0, 0.75, 3000.0, GasStrategy::All));
    assert_eq!(plan.strategy_usable_psi, 1300.0);
    assert_eq!(plan.turn_pressure, 1700.0);
    assert_close(plan.strategy_usable_vol, 32.5, 1e-9);
}

#[test]
fn test_half_rounds_turn_pressure_up() {
    let plan = calc_gas_plan(&imperial_plan("AL80", 100.0, 0.75, 3000.0, GasStrategy::Half));
    assert_eq!(plan.turn_pressure_exact, 2350.0);
    assert_eq!(plan.turn_pressure, 2400.0);
    assert_eq!(plan.strategy_usable_psi, 600.0);
    assert_close(plan.strategy_usable_vol, 15.0, 1e-9);
}

#[test]
fn test_half_open_water_plan() {
    let plan = calc_gas_plan(&imperial_plan("AL80", 80.0, 0.6, 3000.0, GasStrategy::Half));
    assert_eq!(plan.min_gas_psi, 1000.0);
    assert_eq!(plan.turn_pressure_exact, 2000.0);
    assert_eq!(plan.turn_pressure, 2000.0);
}

#[test]
fn test_thirds_floors_allotment() {
    let plan = calc_gas_plan(&imperial_plan("AL80", 100.0, 0.75, 3000.0, GasStrategy::Third));
    assert_eq!(plan.turn_pressure_exact, 2567.0);
    assert_eq!(plan.turn_pressure, 2600.0);
    assert_eq!(plan.strategy_usable_psi, 400.0);
}

#[test]
fn test_thirds_double_al80() {
    let plan = calc_gas_plan(&imperial_plan(
        "Double AL80",
        100.0,
        0.5,
        3000.0,
        GasStrategy::Third,
    ));
    assert_eq!(plan.min_gas_psi, 600.0);
    assert_eq!(plan.usable_psi, 2400.0);
    assert_eq!(plan.strategy_usable_psi, 800.0);
    assert_eq!(plan.turn_pressure, 2200.0);
}

#[test]
fn test_modified_thirds_ignores_min_gas() {
    let plan = calc_gas_plan(&imperial_plan(
        "AL80",
        100.0,
        0.75,
        3000.0,
        GasStrategy::Modified,
    ));
    assert_eq!(plan.min_gas_psi, 1700.0);
    assert_eq!(plan.turn_pressure_exact, 2334.0);
    assert_eq!(plan.turn_pressure, 2400.0);
}

#[test]
fn test_modified_thirds_reserve_lattice() {
    // 3100 rounds down to a 3000 reserve base, so the turn is exact
    let plan = calc_gas_plan(&imperial_plan(
        "Double AL80",
        60.0,
        0.5,
        3100.0,
        GasStrategy::Modified,
    ));
    assert_eq!(plan.turn_pressure_exact, 2400.0);
    assert_eq!(plan.turn_pressure, 2400.0);
    assert_eq!(plan.strategy_usable_psi, 700.0);

    let plan = calc_gas_plan(&imperial_plan(
        "Double AL80",
        60.0,
        0.5,
        3000.0,
        GasStrategy::Modified,
    ));
    assert_eq!(plan.turn_pressure_exact, 2334.0);
    assert_eq!(plan.turn_pressure, 2400.0);
    assert_eq!(plan.strategy_usable_psi, 600.0);
}

#[test]
fn test_out_and_back_durations_use_both_legs() {
    let plan = calc_gas_plan(&imperial_plan(
        "Double AL80",
        66.0,
        0.5,
        3000.0,
        GasStrategy::Modified,
    ));
    // 600 psi each way on factor 5 is 60 cu ft at 1.5 cu ft/min
    assert_close(plan.expected_time_max, 40.0, 1e-9);
    assert_close(plan.expected_time_avg, 60.0, 1e-9);
}

/// Invariants every plan with depth > 0 must satisfy
fn assert_plan_invariants(plan: &PlanResult, start: f64, label: &str) {
    assert_eq!(plan.min_gas_psi % 100.0, 0.0, "{label}");
    assert!(plan.min_gas_psi >= 500.0, "{label}");
    assert_eq!(plan.turn_pressure % 100.0, 0.0, "{label}");
    assert!(plan.turn_pressure >= plan.turn_pressure_exact, "{label}");
    assert!(plan.turn_pressure - plan.turn_pressure_exact < 100.0, "{label}");
    assert_close(plan.strategy_usable_psi, start - plan.turn_pressure, 1e-9);
    assert!(
        plan.expected_time_avg > plan.expected_time_max,
        "{label}: avg {} should exceed max {}",
        plan.expected_time_avg,
        plan.expected_time_max
    );
}

#[test]
fn test_plan_invariants_across_strategies_and_starts() {
    for strategy in GasStrategy::ALL {
        for start in [2500.0, 3000.0, 3050.0, 3442.0] {
            let plan = calc_gas_plan(&imperial_plan("Double HP100", 90.0, 0.6, start, strategy));
            assert_plan_invariants(&plan, start, &format!("{strategy} from {start}"));
        }
    }
}

#[test]
fn test_plan_invariants_across_depths() {
    for strategy in GasStrategy::ALL {
        for depth in [10.0, 33.0, 60.0, 100.0, 130.0] {
            let plan = calc_gas_plan(&imperial_plan("Double AL80", depth, 0.5, 3000.0, strategy));
            assert_plan_invariants(&plan, 3000.0, &format!("{strategy} at {depth} ft"));
        }
    }
}

#[test]
fn test_modified_thirds_can_exceed_usable_gas() {
    // Modified thirds is derived from the start pressure alone
    let plan = calc_gas_plan(&imperial_plan(
        "AL80",
        100.0,
        0.75,
        2000.0,
        GasStrategy::Modified,
    ));
    assert_eq!(plan.min_gas_psi, 1700.0);
    assert_eq!(plan.usable_psi, 300.0);
    assert_eq!(plan.strategy_usable_psi, 400.0);
    assert_eq!(plan.turn_pressure, 1600.0);
}

// === Degenerate Plans ===

#[test]
fn test_start_below_min_gas_has_nothing_usable() {
    let plan = calc_gas_plan(&imperial_plan("AL80", 200.0, 1.0, 1000.0, GasStrategy::Third));
    assert_eq!(plan.min_gas_psi, 6800.0);
    assert_eq!(plan.usable_psi, 0.0);
    assert_eq!(plan.turn_pressure, 1000.0);
    assert_eq!(plan.expected_time_max, 0.0);
    assert_eq!(plan.expected_time_avg, 0.0);
}

#[test]
fn test_surface_plan_uses_floor() {
    let plan = calc_gas_plan(&imperial_plan(
        "Double AL80",
        0.0,
        0.5,
        3000.0,
        GasStrategy::Half,
    ));
    assert_eq!(plan.min_gas_psi, 500.0);
    assert_close(plan.min_gas_vol, 1.0, 1e-12);
    assert_eq!(plan.turn_pressure, 1800.0);
    assert_close(plan.expected_time_max, 240.0, 1e-9);
}

#[test]
fn test_custom_tank() {
    let tank = Tank::custom("Steel 72", 72.0, 2475.0, 2.9);
    let input = GasPlanInput {
        depth: 60.0,
        scr: 0.5,
        start_pressure: 2475.0,
        tank,
        gas_strategy: GasStrategy::Third,
        unit_system: UnitSystem::Imperial,
    };
    let plan = calc_gas_plan(&input);

    // 13.36 cu ft on a factor-2.9 tank is 461 psi
    assert_eq!(plan.min_gas_psi, 500.0);
    assert_eq!(plan.usable_psi, 1975.0);
    assert_eq!(plan.turn_pressure, 1900.0);
}

// === Metric ===

#[test]
fn test_metric_plan_reports_internal_units() {
    let input = GasPlanInput {
        depth: 20.0,
        scr: 15.0,
        start_pressure: 210.0,
        tank: find_tank("Double AL80").unwrap().clone(),
        gas_strategy: GasStrategy::Modified,
        unit_system: UnitSystem::Metric,
    };
    let plan = calc_gas_plan(&input);

    assert_eq!(plan.turn_pressure, 2400.0);
    assert_close(
        to_display_pressure(plan.turn_pressure, UnitSystem::Metric),
        165.47,
        0.01,
    );
    assert_close(plan.expected_time_max, 40.8, 0.01);
}

#[test]
fn test_metric_all_usable() {
    let input = GasPlanInput {
        depth: 30.0,
        scr: 21.0,
        start_pressure: 230.0,
        tank: find_tank("Double HP100").unwrap().clone(),
        gas_strategy: GasStrategy::All,
        unit_system: UnitSystem::Metric,
    };
    let plan = calc_gas_plan(&input);

    assert_eq!(plan.min_gas_psi, 700.0);
    assert_eq!(plan.turn_pressure, 700.0);
    assert_close(plan.usable_psi, 2635.874, 1e-6);
}
