// ABOUTME: Constants module organizing conversion factors, seawater physics and catalogs
// ABOUTME: Eliminates magic numbers from the unit, atmosphere and planning calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain

/// Display/internal unit conversion factors
pub mod units;

/// Seawater pressure model and gas-planning rule constants
pub mod physics;

/// Reference catalogs of tanks and standard gas mixes
pub mod catalog;
