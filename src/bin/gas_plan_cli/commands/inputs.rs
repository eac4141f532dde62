// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command-line input checks shared by the gas-plan commands
// ABOUTME: Range checks on numeric options and tank resolution against the planner config

use crate::Result;
use dive_gas_planner::config::PlannerConfig;
use dive_gas_planner::{find_tank, AppError, Tank};

/// Reject negative or NaN values
pub fn non_negative(value: f64, field: &str, what: &str) -> Result<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(AppError::out_of_range(format!("{what} must not be negative")).with_field(field));
    }
    Ok(value)
}

/// Reject zero, negative or NaN values
pub fn positive(value: f64, field: &str, what: &str) -> Result<f64> {
    if value.is_nan() || value <= 0.0 {
        return Err(AppError::out_of_range(format!("{what} must be positive")).with_field(field));
    }
    Ok(value)
}

/// Tank named on the command line, or the configured default
///
/// An unknown `--tank` is a lookup failure; an unknown default is a
/// configuration error.
pub fn resolve_tank(config: &PlannerConfig, name: Option<&str>) -> Result<&'static Tank> {
    match name {
        Some(name) => find_tank(name),
        None => config.resolve_default_tank().map_err(AppError::from),
    }
}
