// ABOUTME: Maximum operating depth of a breathing gas for a PPO2 limit
// ABOUTME: Floors in feet and again after metric conversion so depth is never overstated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dive_gas_core::constants::physics::{FEET_SEAWATER_PER_ATM, SURFACE_ATA};
use dive_gas_core::constants::units::FEET_TO_METERS;
use dive_gas_core::{GasMix, UnitSystem};
use tracing::debug;

/// Maximum operating depth in display units (ft or m)
///
/// `ata = ppo2 / (o2 / 100)`, `mod_ft = floor((ata - 1) * 33)`; metric results
/// are `floor(mod_ft * 0.3048)`. A 0% oxygen mix has no ceiling under this
/// formula and yields `None`.
///
/// Air at 1.4 gives 186 ft (56 m), Nitrox 32 gives 111 ft (33 m).
#[must_use]
pub fn get_mod(o2_percent: f64, ppo2_limit: f64, unit_system: UnitSystem) -> Option<f64> {
    if o2_percent == 0.0 {
        debug!("MOD undefined for a mix without oxygen");
        return None;
    }

    let ata = ppo2_limit / (o2_percent / 100.0);
    let mod_ft = ((ata - SURFACE_ATA) * FEET_SEAWATER_PER_ATM).floor();

    Some(match unit_system {
        UnitSystem::Imperial => mod_ft,
        UnitSystem::Metric => (mod_ft * FEET_TO_METERS).floor(),
    })
}

/// Maximum operating depth of a mix
#[must_use]
pub fn mod_for_gas(gas: &GasMix, ppo2_limit: f64, unit_system: UnitSystem) -> Option<f64> {
    get_mod(gas.o2_percent, ppo2_limit, unit_system)
}
