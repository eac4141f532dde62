// ABOUTME: Consumption and gas-planning engine built on the atmosphere model
// ABOUTME: SCR derivation, single-diver gas plans and team turn pressures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning Engine
//!
//! - `consumption`: surface consumption rate from a logged segment, and the
//!   inverse gas-tracking helpers
//! - `gas_plan`: minimum gas, strategy allotment, turn pressure, durations
//! - `team`: controlling-diver rule of thirds for a team
//!
//! # Example
//!
//! ```rust
//! use dive_gas_planner::planning::{calc_gas_plan, GasPlanInput};
//! use dive_gas_planner::{find_tank, GasStrategy, UnitSystem};
//!
//! let tank = find_tank("Double AL80").unwrap().clone();
//! let plan = calc_gas_plan(&GasPlanInput {
//!     depth: 60.0,
//!     scr: 0.5,
//!     start_pressure: 3100.0,
//!     tank,
//!     gas_strategy: GasStrategy::Modified,
//!     unit_system: UnitSystem::Imperial,
//! });
//! assert_eq!(plan.turn_pressure, 2400.0);
//! ```

pub mod consumption;
pub mod gas_plan;
pub mod team;

pub use consumption::{calc_scr, consumption_at_depth, pressure_drop_per_minute, ScrInput};
pub use gas_plan::{calc_gas_plan, GasPlanInput, PlanResult};
pub use team::{calc_team_turn_pressures, TeamPlan};
