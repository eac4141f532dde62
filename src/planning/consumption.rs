// ABOUTME: Surface consumption rate (SCR/RMV) from a logged pressure drop
// ABOUTME: Also converts an SCR back to consumption and pressure drop at depth for gas tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Surface consumption rate
//!
//! `SCR = volume consumed / (time x ATA)`, with the volume taken from the
//! tank factor: `(PSI consumed / 100) x factor`. The result is a surface
//! equivalent rate in cu ft/min regardless of the display unit system, so
//! dives at different depths can be compared and fed into the gas plan.

use crate::atmosphere::calc_ata;
use crate::units::from_display_pressure;
use dive_gas_core::constants::physics::TANK_FACTOR_PRESSURE_PSI;
use dive_gas_core::UnitSystem;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Logged dive segment used to derive an SCR
///
/// Pressures and depth are display units of `unit_system`. Missing readings
/// are `None`; `tank_factor` is always cu ft per 100 PSI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrInput {
    /// Cylinder pressure at the start of the segment
    pub start_psi: Option<f64>,
    /// Cylinder pressure at the end of the segment
    pub end_psi: Option<f64>,
    /// Segment duration (minutes)
    pub time: Option<f64>,
    /// Average depth of the segment
    pub depth: Option<f64>,
    /// Tank factor of the cylinder breathed (cu ft per 100 PSI)
    pub tank_factor: f64,
    /// Unit system of `start_psi`, `end_psi` and `depth`
    pub unit_system: UnitSystem,
}

/// Calculate the surface consumption rate in cu ft/min
///
/// Returns `None` ("cannot compute yet") when a pressure or the depth is
/// missing, or when the time is missing, zero, negative or NaN. A start
/// pressure below the end pressure is not rejected and yields a negative rate.
#[must_use]
pub fn calc_scr(input: &ScrInput) -> Option<f64> {
    let (Some(start), Some(end), Some(depth)) = (input.start_psi, input.end_psi, input.depth)
    else {
        debug!("SCR skipped: pressure or depth reading missing");
        return None;
    };
    let Some(time) = input.time.filter(|minutes| *minutes > 0.0) else {
        debug!(time = ?input.time, "SCR skipped: no positive segment time");
        return None;
    };

    let start_psi = from_display_pressure(start, input.unit_system);
    let end_psi = from_display_pressure(end, input.unit_system);
    let psi_consumed = start_psi - end_psi;
    let volume_consumed = (psi_consumed / TANK_FACTOR_PRESSURE_PSI) * input.tank_factor;

    let ata = calc_ata(depth, input.unit_system);
    let scr = volume_consumed / (time * ata);

    debug!(
        psi_consumed,
        volume_consumed,
        ata,
        scr,
        unit_system = input.unit_system.name(),
        "SCR calculated"
    );
    Some(scr)
}

/// Gas consumed per minute at depth (cu ft/min) for a surface rate
///
/// `depth` is in the display unit of `unit_system`.
#[must_use]
pub fn consumption_at_depth(scr_cu_ft: f64, depth: f64, unit_system: UnitSystem) -> f64 {
    scr_cu_ft * calc_ata(depth, unit_system)
}

/// Cylinder pressure drop per minute at depth (PSI/min)
///
/// SCR 0.5 at 2 ATA on a factor-5 set of doubles drops 20 PSI per minute.
#[must_use]
pub fn pressure_drop_per_minute(
    scr_cu_ft: f64,
    depth: f64,
    unit_system: UnitSystem,
    tank_factor: f64,
) -> f64 {
    consumption_at_depth(scr_cu_ft, depth, unit_system) / tank_factor * TANK_FACTOR_PRESSURE_PSI
}
