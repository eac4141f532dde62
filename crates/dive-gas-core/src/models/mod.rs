// ABOUTME: Core data models for dive gas planning
// ABOUTME: Unit systems, cylinder records, breathing-gas mixes and gas-management strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Display unit system selection
pub mod unit_system;

/// Cylinder records and tank-factor helpers
pub mod tank;

/// Breathing-gas mixes
pub mod gas_mix;

/// Gas-management strategies
pub mod strategy;

pub use gas_mix::GasMix;
pub use strategy::GasStrategy;
pub use tank::Tank;
pub use unit_system::UnitSystem;
