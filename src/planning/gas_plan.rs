// ABOUTME: Gas plan: CAT minimum gas, strategy allotment, turn pressure and duration estimates
// ABOUTME: Takes display-unit inputs and returns every pressure and volume in internal units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Gas planning
//!
//! The plan is computed in stages:
//!
//! 1. Normalize depth, SCR and start pressure to feet, cu ft/min and PSI.
//! 2. Minimum gas by the CAT formula for two divers ascending at 10 ft/min
//!    plus one minute, rounded up to 100 PSI with a 500 PSI floor.
//! 3. Usable gas above minimum gas, floored at zero.
//! 4. Strategy allotment (all, half, third or modified thirds).
//! 5. Turn pressure rounded up to 100 PSI; the allotment is re-derived from it.
//! 6. Duration at maximum depth and at the average of depth and surface pressure.
//!
//! `PlanResult` is always in PSI and cubic feet, whatever `unit_system` the
//! input used. Callers convert back with [`crate::units`] for display.

use crate::atmosphere::calc_ata_imperial;
use crate::units::{from_display_depth, from_display_pressure, from_display_volume};
use dive_gas_core::constants::physics::{
    ASCENT_BUFFER_MIN, ASCENT_RATE_FT_PER_MIN, MIN_GAS_FLOOR_PSI, MODIFIED_THIRDS_LATTICE_PSI,
    PRESSURE_ROUNDING_PSI, RESERVE_DIVER_COUNT, SURFACE_ATA,
};
use dive_gas_core::{GasStrategy, Tank, UnitSystem};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs for a gas plan
///
/// `depth`, `scr` and `start_pressure` are display units of `unit_system`
/// (ft, cu ft/min, PSI or m, L/min, bar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasPlanInput {
    /// Planned maximum depth
    pub depth: f64,
    /// Surface consumption rate of the diver
    pub scr: f64,
    /// Cylinder pressure at the start of the dive
    pub start_pressure: f64,
    /// Cylinder configuration breathed
    pub tank: Tank,
    /// Gas-management strategy
    pub gas_strategy: GasStrategy,
    /// Unit system of `depth`, `scr` and `start_pressure`
    pub unit_system: UnitSystem,
}

/// Result of a gas plan, in internal units (PSI, cu ft, minutes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Minimum gas reserve (PSI, multiple of 100, at least 500)
    pub min_gas_psi: f64,
    /// Start pressure above minimum gas (PSI, never negative)
    pub usable_psi: f64,
    /// Pressure the strategy allows to be breathed before turning (PSI)
    pub strategy_usable_psi: f64,
    /// Gas volume of `strategy_usable_psi` (cu ft)
    pub strategy_usable_vol: f64,
    /// Turn pressure rounded up to 100 PSI
    pub turn_pressure: f64,
    /// Turn pressure before rounding
    pub turn_pressure_exact: f64,
    /// Minimum gas volume from the CAT formula (cu ft)
    pub min_gas_vol: f64,
    /// Duration assuming the whole dive at maximum depth (minutes)
    pub expected_time_max: f64,
    /// Duration assuming the average ambient pressure (minutes)
    pub expected_time_avg: f64,
}

/// Minimum-gas derivation for a depth
#[derive(Debug, Clone, Copy)]
struct MinimumGas {
    volume: f64,
    psi: f64,
    max_ata: f64,
    avg_ata: f64,
}

/// Calculate a complete gas plan
///
/// Never fails: a start pressure below minimum gas gives zero usable gas and
/// the downstream quantities degrade accordingly.
#[must_use]
pub fn calc_gas_plan(input: &GasPlanInput) -> PlanResult {
    let depth_ft = from_display_depth(input.depth, input.unit_system);
    let scr_cu_ft = from_display_volume(input.scr, input.unit_system);
    let start_psi = from_display_pressure(input.start_pressure, input.unit_system);

    debug!(
        depth_ft,
        scr_cu_ft,
        start_psi,
        tank = %input.tank.name,
        strategy = input.gas_strategy.name(),
        "Planning gas"
    );

    let min_gas = minimum_gas(depth_ft, scr_cu_ft, &input.tank);
    let usable_psi = (start_psi - min_gas.psi).max(0.0);

    let allotment = strategy_allotment(input.gas_strategy, start_psi, usable_psi);

    let turn_pressure_exact = start_psi - allotment;
    let turn_pressure = round_up(turn_pressure_exact, PRESSURE_ROUNDING_PSI);
    // Duration and volume use the attainable allotment behind the rounded turn
    let strategy_usable_psi = start_psi - turn_pressure;

    let used_psi = if input.gas_strategy.is_out_and_back() {
        strategy_usable_psi * 2.0
    } else {
        strategy_usable_psi
    };
    let used_vol = input.tank.volume_at(used_psi);
    let expected_time_max = used_vol / (scr_cu_ft * min_gas.max_ata);
    let expected_time_avg = used_vol / (scr_cu_ft * min_gas.avg_ata);

    let result = PlanResult {
        min_gas_psi: min_gas.psi,
        usable_psi,
        strategy_usable_psi,
        strategy_usable_vol: input.tank.volume_at(strategy_usable_psi),
        turn_pressure,
        turn_pressure_exact,
        min_gas_vol: min_gas.volume,
        expected_time_max,
        expected_time_avg,
    };
    debug!(
        min_gas_psi = result.min_gas_psi,
        turn_pressure = result.turn_pressure,
        expected_time_max = result.expected_time_max,
        "Gas plan calculated"
    );
    result
}

/// CAT formula: consumption (two divers) x average ATA x time to surface
fn minimum_gas(depth_ft: f64, scr_cu_ft: f64, tank: &Tank) -> MinimumGas {
    let time_to_surface = depth_ft / ASCENT_RATE_FT_PER_MIN + ASCENT_BUFFER_MIN;
    let max_ata = calc_ata_imperial(depth_ft);
    let avg_ata = (max_ata + SURFACE_ATA) / 2.0;
    let team_scr = scr_cu_ft * RESERVE_DIVER_COUNT;

    let volume = team_scr * avg_ata * time_to_surface;

    let psi = round_up(tank.pressure_for(volume).ceil(), PRESSURE_ROUNDING_PSI)
        .max(MIN_GAS_FLOOR_PSI);

    debug!(time_to_surface, avg_ata, volume, psi, "Minimum gas derived");
    MinimumGas {
        volume,
        psi,
        max_ata,
        avg_ata,
    }
}

/// Pressure a strategy allows before turning, before turn-pressure rounding
fn strategy_allotment(strategy: GasStrategy, start_psi: f64, usable_psi: f64) -> f64 {
    match strategy {
        GasStrategy::All => usable_psi,
        GasStrategy::Half => (usable_psi / 2.0).floor(),
        GasStrategy::Third => (usable_psi / 3.0).floor(),
        GasStrategy::Modified => modified_thirds_allotment(start_psi),
    }
}

/// Modified rule of thirds (GUE Intro to Cave)
///
/// The reserve is a third of the start pressure rounded down to the 300 PSI
/// lattice; the allotment is a third of what remains. It ignores minimum gas.
fn modified_thirds_allotment(start_psi: f64) -> f64 {
    let reserve_base =
        (start_psi / MODIFIED_THIRDS_LATTICE_PSI).floor() * MODIFIED_THIRDS_LATTICE_PSI;
    let reserve_gas = reserve_base / 3.0;
    let usable_pool = start_psi - reserve_gas;
    (usable_pool / 3.0).floor()
}

/// Round `value` up to the next multiple of `increment`
fn round_up(value: f64, increment: f64) -> f64 {
    (value / increment).ceil() * increment
}
