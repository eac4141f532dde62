// ABOUTME: Main library entry point for the dive gas planner
// ABOUTME: Unit conversion, atmosphere model, SCR, gas plans, team plans and MOD
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dive Gas Planner
//!
//! A unit-aware gas-planning library for scuba diving, following GUE gas
//! management practice.
//!
//! ## Features
//!
//! - **Unit conversion**: imperial display units are the internal units; metric
//!   display values (m, bar, L) are converted at the edges
//! - **Atmosphere model**: depth to absolute pressure (33 ft / 10 m per ATA)
//! - **SCR**: surface consumption rate from a logged pressure drop
//! - **Gas plan**: CAT minimum gas, strategy allotment, turn pressure, durations
//! - **MOD**: maximum operating depth for an oxygen fraction and PPO2 limit
//!
//! ## Architecture
//!
//! Every calculation is a pure, synchronous function over immutable records.
//! Nothing is cached or shared besides the static tank and gas catalogs from
//! `dive-gas-core`. Calculations never return errors: missing data is `None`
//! and out-of-domain quantities are clamped. `AppError` only appears where text
//! is parsed or a catalog entry is looked up by name.
//!
//! ## Example
//!
//! ```rust
//! use dive_gas_planner::mix::get_mod;
//! use dive_gas_planner::UnitSystem;
//!
//! assert_eq!(get_mod(32.0, 1.4, UnitSystem::Imperial), Some(111.0));
//! assert_eq!(get_mod(0.0, 1.4, UnitSystem::Imperial), None);
//! ```

/// Display/internal unit conversion
pub mod units;

/// Depth to absolute pressure
pub mod atmosphere;

/// SCR, gas plans and team turn pressures
pub mod planning;

/// Maximum operating depth
pub mod mix;

/// Planner defaults from the environment
pub mod config;

/// Structured logging setup
pub mod logging;

pub use dive_gas_core::constants;
pub use dive_gas_core::errors::{AppError, AppResult, ErrorCode};
pub use dive_gas_core::{
    find_gas, find_tank, GasMix, GasStrategy, Tank, UnitSystem, STANDARD_GASES, TANKS,
};
