// ABOUTME: Conversions between internal units (ft, PSI, cu ft) and display units
// ABOUTME: Imperial display values pass through unchanged, metric ones are scaled linearly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit conversion between the internal and display unit systems
//!
//! Internal units are always feet, PSI and cubic feet. Every function is a
//! single scalar multiplication: no rounding, no validation. Negative or zero
//! values convert like any other number.

use dive_gas_core::constants::units::{
    BAR_TO_PSI, CU_FT_TO_LITERS, FEET_TO_METERS, LITERS_TO_CU_FT, METERS_TO_FEET, PSI_TO_BAR,
};
use dive_gas_core::UnitSystem;

/// Internal PSI to display pressure (PSI or bar)
#[must_use]
pub fn to_display_pressure(psi: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => psi,
        UnitSystem::Metric => psi * PSI_TO_BAR,
    }
}

/// Display pressure (PSI or bar) to internal PSI
#[must_use]
pub fn from_display_pressure(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => value,
        UnitSystem::Metric => value * BAR_TO_PSI,
    }
}

/// Internal feet to display depth (feet or meters)
#[must_use]
pub fn to_display_depth(feet: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => feet,
        UnitSystem::Metric => feet * FEET_TO_METERS,
    }
}

/// Display depth (feet or meters) to internal feet
#[must_use]
pub fn from_display_depth(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => value,
        UnitSystem::Metric => value * METERS_TO_FEET,
    }
}

/// Internal cubic feet to display volume (cu ft or liters)
///
/// Also used for rates: cu ft/min becomes L/min.
#[must_use]
pub fn to_display_volume(cu_ft: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => cu_ft,
        UnitSystem::Metric => cu_ft * CU_FT_TO_LITERS,
    }
}

/// Display volume (cu ft or liters) to internal cubic feet
#[must_use]
pub fn from_display_volume(value: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => value,
        UnitSystem::Metric => value * LITERS_TO_CU_FT,
    }
}
