// ABOUTME: Shared test utilities for the dive gas planner integration tests
// ABOUTME: Provides quiet logging setup, float assertions and input builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `dive_gas_planner`

use dive_gas_planner::planning::GasPlanInput;
use dive_gas_planner::{find_tank, GasStrategy, UnitSystem};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} (±{tolerance}), got {actual}"
    );
}

/// Imperial plan input for a catalog tank
pub fn imperial_plan(
    tank: &str,
    depth: f64,
    scr: f64,
    start_pressure: f64,
    gas_strategy: GasStrategy,
) -> GasPlanInput {
    GasPlanInput {
        depth,
        scr,
        start_pressure,
        tank: find_tank(tank).unwrap().clone(),
        gas_strategy,
        unit_system: UnitSystem::Imperial,
    }
}
