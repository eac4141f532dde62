// ABOUTME: Configuration management module for planner defaults
// ABOUTME: Loads unit system, PPO2 limits, strategy and tank defaults from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the dive gas planner
//!
//! - **Planner**: defaults for front ends, read from `DIVE_*` environment variables
//! - **Error**: validation failures

/// Configuration error types
pub mod error;
/// Planner defaults from environment variables
pub mod planner;

pub use error::ConfigError;
pub use planner::{env_keys, PlannerConfig};
