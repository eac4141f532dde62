// ABOUTME: Reference catalogs of common cylinders and standard breathing gases
// ABOUTME: Static ordered arrays with case-insensitive lookup by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{GasMix, Tank};

/// Common cylinder configurations, in presentation order
///
/// Factors are the GUE practitioner values (cu ft per 100 PSI).
pub static TANKS: [Tank; 9] = [
    Tank::new("AL80", 77.0, 3000.0, 2.5),
    Tank::new("HP100", 100.0, 3442.0, 3.0),
    Tank::new("LP85", 85.0, 2640.0, 3.0),
    Tank::new("LP95", 95.0, 2640.0, 3.5),
    Tank::new("LP104", 104.0, 2640.0, 4.0),
    Tank::new("HP120", 120.0, 3442.0, 3.5),
    Tank::new("Double AL80", 154.0, 3000.0, 5.0),
    Tank::new("Double HP100", 200.0, 3442.0, 6.0),
    Tank::new("Double LP85", 170.0, 2640.0, 6.0),
];

/// Standard gas mixes (oxygen %, helium %)
pub static STANDARD_GASES: [GasMix; 7] = [
    GasMix::standard("Air", 21.0, 0.0),
    GasMix::standard("Nitrox 32", 32.0, 0.0),
    GasMix::standard("TriMix 21/35", 21.0, 35.0),
    GasMix::standard("TriMix 18/45", 18.0, 45.0),
    GasMix::standard("TriMix 15/55", 15.0, 55.0),
    GasMix::standard("TriMix 12/65", 12.0, 65.0),
    GasMix::standard("TriMix 10/70", 10.0, 70.0),
];

/// Look up a catalog tank by name (case-insensitive)
///
/// # Errors
///
/// Returns `AppError::not_found` if no catalog tank has that name
pub fn find_tank(name: &str) -> AppResult<&'static Tank> {
    let wanted = name.trim();
    TANKS
        .iter()
        .find(|tank| tank.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| AppError::not_found(format!("Tank '{wanted}'")).with_field("tank"))
}

/// Look up a standard gas by name (case-insensitive)
///
/// # Errors
///
/// Returns `AppError::not_found` if no standard gas has that name
pub fn find_gas(name: &str) -> AppResult<&'static GasMix> {
    let wanted = name.trim();
    STANDARD_GASES
        .iter()
        .find(|gas| gas.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| AppError::not_found(format!("Gas '{wanted}'")).with_field("gas"))
}
