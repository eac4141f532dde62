// ABOUTME: Configuration error types for planner settings validation
// ABOUTME: Defines error variants for out-of-range limits and unknown tanks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for planner settings validation.

use dive_gas_core::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., PPO2 above 2.0)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Default tank is not in the catalog
    #[error("Unknown tank: {0}")]
    UnknownTank(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
