// ABOUTME: Seawater depth to absolute pressure (ATA) conversion
// ABOUTME: 33 ft or 10 m of seawater per atmosphere on top of one surface atmosphere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dive_gas_core::constants::physics::{
    FEET_SEAWATER_PER_ATM, METERS_SEAWATER_PER_ATM, SURFACE_ATA,
};
use dive_gas_core::UnitSystem;

/// Absolute pressure at `depth_ft` feet of seawater
///
/// Negative depths give less than one atmosphere; that is accepted, not an error.
#[must_use]
pub fn calc_ata_imperial(depth_ft: f64) -> f64 {
    depth_ft / FEET_SEAWATER_PER_ATM + SURFACE_ATA
}

/// Absolute pressure at `depth_m` meters of seawater
#[must_use]
pub fn calc_ata_metric(depth_m: f64) -> f64 {
    depth_m / METERS_SEAWATER_PER_ATM + SURFACE_ATA
}

/// Absolute pressure for a display-unit depth
///
/// `depth` must already be in the display unit matching `unit_system`
/// (feet for imperial, meters for metric); no conversion happens here.
#[must_use]
pub fn calc_ata(depth: f64, unit_system: UnitSystem) -> f64 {
    match unit_system {
        UnitSystem::Imperial => calc_ata_imperial(depth),
        UnitSystem::Metric => calc_ata_metric(depth),
    }
}
