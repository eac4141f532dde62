// ABOUTME: Unit conversion constants for depth, pressure and volume
// ABOUTME: Each pair is the practitioner-rounded factor in both directions, not exact inverses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Feet to meters
pub const FEET_TO_METERS: f64 = 0.3048;

/// Meters to feet
pub const METERS_TO_FEET: f64 = 3.280_84;

/// PSI to bar
pub const PSI_TO_BAR: f64 = 0.068_947_6;

/// Bar to PSI
pub const BAR_TO_PSI: f64 = 14.5038;

/// Cubic feet to liters
pub const CU_FT_TO_LITERS: f64 = 28.3168;

/// Liters to cubic feet
pub const LITERS_TO_CU_FT: f64 = 0.035_314_7;
