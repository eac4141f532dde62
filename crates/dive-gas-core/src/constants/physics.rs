// ABOUTME: Seawater pressure model and gas-planning rule constants
// ABOUTME: Depth per atmosphere, ascent assumptions, rounding lattices and reserve floors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Feet of seawater per atmosphere
pub const FEET_SEAWATER_PER_ATM: f64 = 33.0;

/// Meters of seawater per atmosphere
pub const METERS_SEAWATER_PER_ATM: f64 = 10.0;

/// Absolute pressure at the surface (ATA)
pub const SURFACE_ATA: f64 = 1.0;

/// Assumed ascent rate for the minimum-gas calculation (ft/min)
pub const ASCENT_RATE_FT_PER_MIN: f64 = 10.0;

/// Extra minute added to the ascent time for problem solving at depth
pub const ASCENT_BUFFER_MIN: f64 = 1.0;

/// Divers sharing the reserve during an out-of-gas ascent
pub const RESERVE_DIVER_COUNT: f64 = 2.0;

/// Cylinder pressure drop the tank factor is expressed against (PSI)
pub const TANK_FACTOR_PRESSURE_PSI: f64 = 100.0;

/// Increment that minimum gas and turn pressure are rounded up to (PSI)
pub const PRESSURE_ROUNDING_PSI: f64 = 100.0;

/// Minimum gas is never planned below this pressure (PSI)
pub const MIN_GAS_FLOOR_PSI: f64 = 500.0;

/// Lattice the modified rule of thirds rounds the start pressure down to (PSI)
pub const MODIFIED_THIRDS_LATTICE_PSI: f64 = 300.0;

/// Default working PPO2 limit (bar)
pub const DEFAULT_PPO2_LIMIT: f64 = 1.4;

/// Default contingency/deco PPO2 limit (bar)
pub const DEFAULT_CONTINGENCY_PPO2_LIMIT: f64 = 1.6;

/// Highest PPO2 limit accepted by configuration (bar)
pub const MAX_PPO2_LIMIT: f64 = 2.0;
