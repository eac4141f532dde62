// ABOUTME: Tests for surface consumption rate and gas tracking at depth
// ABOUTME: Validates SCR against logged dives in both unit systems and the None cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, init_test_logging};
use dive_gas_planner::planning::{
    calc_scr, consumption_at_depth, pressure_drop_per_minute, ScrInput,
};
use dive_gas_planner::units::to_display_volume;
use dive_gas_planner::UnitSystem;

/// A complete 60 minute segment on a factor-6 set of doubles
fn segment(start: f64, end: f64, depth: f64, unit_system: UnitSystem) -> ScrInput {
    ScrInput {
        start_psi: Some(start),
        end_psi: Some(end),
        time: Some(60.0),
        depth: Some(depth),
        tank_factor: 6.0,
        unit_system,
    }
}

// === SCR ===

#[test]
fn test_scr_imperial_logged_dive() {
    init_test_logging();
    let scr = calc_scr(&segment(3400.0, 2400.0, 60.0, UnitSystem::Imperial)).unwrap();
    assert_close(scr, 0.3548, 1e-4);
}

#[test]
fn test_scr_metric_inputs_give_cubic_feet() {
    init_test_logging();
    let scr = calc_scr(&segment(234.0, 165.0, 18.0, UnitSystem::Metric)).unwrap();
    assert_close(scr, 0.3574, 1e-4);
}

#[test]
fn test_scr_double_al80_at_three_atmospheres() {
    let input = ScrInput {
        start_psi: Some(3000.0),
        end_psi: Some(1000.0),
        time: Some(50.0),
        depth: Some(66.0),
        tank_factor: 5.0,
        unit_system: UnitSystem::Imperial,
    };
    let scr = calc_scr(&input).unwrap();
    assert_close(scr, 0.6667, 1e-4);
}

#[test]
fn test_scr_metric_display_in_liters() {
    let input = ScrInput {
        start_psi: Some(200.0),
        end_psi: Some(100.0),
        time: Some(50.0),
        depth: Some(20.0),
        tank_factor: 6.0,
        unit_system: UnitSystem::Metric,
    };
    let scr = calc_scr(&input).unwrap();
    assert_close(to_display_volume(scr, UnitSystem::Metric), 16.43, 0.01);
}

#[test]
fn test_scr_missing_readings_is_none() {
    let complete = segment(3000.0, 2000.0, 60.0, UnitSystem::Imperial);

    let no_start = ScrInput {
        start_psi: None,
        ..complete
    };
    let no_end = ScrInput {
        end_psi: None,
        ..complete
    };
    let no_depth = ScrInput {
        depth: None,
        ..complete
    };
    let no_time = ScrInput {
        time: None,
        ..complete
    };

    assert!(calc_scr(&no_start).is_none());
    assert!(calc_scr(&no_end).is_none());
    assert!(calc_scr(&no_depth).is_none());
    assert!(calc_scr(&no_time).is_none());
}

#[test]
fn test_scr_non_positive_time_is_none() {
    let complete = segment(3000.0, 2000.0, 60.0, UnitSystem::Imperial);

    for time in [0.0, -5.0, f64::NAN] {
        let input = ScrInput {
            time: Some(time),
            ..complete
        };
        assert!(calc_scr(&input).is_none(), "time {time} should not compute");
    }
}

#[test]
fn test_scr_surface_segment() {
    // 10 cu ft over 20 minutes at 1 ATA
    let input = ScrInput {
        start_psi: Some(3000.0),
        end_psi: Some(2600.0),
        time: Some(20.0),
        depth: Some(0.0),
        tank_factor: 2.5,
        unit_system: UnitSystem::Imperial,
    };
    assert_close(calc_scr(&input).unwrap(), 0.5, 1e-12);
}

#[test]
fn test_scr_rising_pressure_is_negative() {
    let scr = calc_scr(&segment(2000.0, 2600.0, 33.0, UnitSystem::Imperial)).unwrap();
    assert!(scr < 0.0);
}

// === Gas Tracking ===

#[test]
fn test_consumption_at_depth_scales_with_ata() {
    assert_eq!(consumption_at_depth(0.5, 0.0, UnitSystem::Imperial), 0.5);
    assert_eq!(consumption_at_depth(0.5, 66.0, UnitSystem::Imperial), 1.5);
    assert_eq!(consumption_at_depth(0.5, 30.0, UnitSystem::Metric), 2.0);
}

#[test]
fn test_pressure_drop_per_minute() {
    assert_eq!(
        pressure_drop_per_minute(0.5, 33.0, UnitSystem::Imperial, 5.0),
        20.0
    );
    assert_close(
        pressure_drop_per_minute(0.5, 99.0, UnitSystem::Imperial, 5.0),
        40.0,
        1e-9,
    );
}

#[test]
fn test_pressure_drop_reproduces_logged_segment() {
    let input = ScrInput {
        start_psi: Some(3000.0),
        end_psi: Some(1000.0),
        time: Some(50.0),
        depth: Some(66.0),
        tank_factor: 5.0,
        unit_system: UnitSystem::Imperial,
    };
    let scr = calc_scr(&input).unwrap();
    let drop = pressure_drop_per_minute(scr, 66.0, UnitSystem::Imperial, 5.0);
    assert_close(drop * 50.0, 2000.0, 1e-6);
}
