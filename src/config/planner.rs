// ABOUTME: Planner defaults loaded from environment variables with validation
// ABOUTME: Supplies unit system, PPO2 limits, strategy and tank defaults to front ends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use dive_gas_core::constants::physics::{
    DEFAULT_CONTINGENCY_PPO2_LIMIT, DEFAULT_PPO2_LIMIT, MAX_PPO2_LIMIT,
};
use dive_gas_core::{find_tank, GasStrategy, Tank, UnitSystem};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Environment variable names
pub mod env_keys {
    /// `imperial` or `metric`
    pub const UNIT_SYSTEM: &str = "DIVE_UNIT_SYSTEM";
    /// Working PPO2 limit in bar
    pub const PPO2_LIMIT: &str = "DIVE_PPO2_LIMIT";
    /// Contingency PPO2 limit in bar
    pub const CONTINGENCY_PPO2_LIMIT: &str = "DIVE_CONTINGENCY_PPO2_LIMIT";
    /// `all`, `half`, `third` or `modified`
    pub const GAS_STRATEGY: &str = "DIVE_GAS_STRATEGY";
    /// Catalog tank name
    pub const DEFAULT_TANK: &str = "DIVE_DEFAULT_TANK";
}

/// Catalog tank used when none is given
const DEFAULT_TANK_NAME: &str = "AL80";

/// Planner defaults for front ends
///
/// Library functions never read this; it only fills in values a user did not
/// supply on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Display unit system
    pub unit_system: UnitSystem,
    /// Working PPO2 limit for MOD (bar)
    pub ppo2_limit: f64,
    /// Contingency PPO2 limit for MOD (bar)
    pub contingency_ppo2_limit: f64,
    /// Gas-management strategy
    pub gas_strategy: GasStrategy,
    /// Catalog tank name
    pub default_tank: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Imperial,
            ppo2_limit: DEFAULT_PPO2_LIMIT,
            contingency_ppo2_limit: DEFAULT_CONTINGENCY_PPO2_LIMIT,
            gas_strategy: GasStrategy::default(),
            default_tank: DEFAULT_TANK_NAME.to_owned(),
        }
    }
}

impl PlannerConfig {
    /// Load planner configuration from environment
    ///
    /// Unparsable values are logged and replaced by their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            unit_system: env_or(env_keys::UNIT_SYSTEM, defaults.unit_system),
            ppo2_limit: env_or(env_keys::PPO2_LIMIT, defaults.ppo2_limit),
            contingency_ppo2_limit: env_or(
                env_keys::CONTINGENCY_PPO2_LIMIT,
                defaults.contingency_ppo2_limit,
            ),
            gas_strategy: env_or(env_keys::GAS_STRATEGY, defaults.gas_strategy),
            default_tank: env::var(env_keys::DEFAULT_TANK)
                .map(|name| name.trim().to_owned())
                .unwrap_or(defaults.default_tank),
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns the first failure of [`Self::validate_limits`] or
    /// [`Self::resolve_default_tank`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_limits()?;
        self.resolve_default_tank()?;
        Ok(())
    }

    /// Validate the PPO2 limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a PPO2 limit is outside (0, 2.0]
    /// or the contingency limit is below the working limit.
    pub fn validate_limits(&self) -> Result<(), ConfigError> {
        if !(self.ppo2_limit > 0.0 && self.ppo2_limit <= MAX_PPO2_LIMIT) {
            return Err(ConfigError::InvalidRange(
                "PPO2 limit must be greater than 0 and at most 2.0 bar",
            ));
        }
        if !(self.contingency_ppo2_limit > 0.0 && self.contingency_ppo2_limit <= MAX_PPO2_LIMIT)
        {
            return Err(ConfigError::InvalidRange(
                "Contingency PPO2 limit must be greater than 0 and at most 2.0 bar",
            ));
        }
        if self.contingency_ppo2_limit < self.ppo2_limit {
            return Err(ConfigError::InvalidRange(
                "Contingency PPO2 limit must not be below the working limit",
            ));
        }
        Ok(())
    }

    /// Catalog entry for the configured default tank
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownTank` if the name is not in the catalog
    pub fn resolve_default_tank(&self) -> Result<&'static Tank, ConfigError> {
        find_tank(&self.default_tank)
            .map_err(|_| ConfigError::UnknownTank(self.default_tank.clone()))
    }
}

/// Parse an environment variable, keeping `default` when unset or invalid
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable configuration value");
            default
        }),
        Err(_) => default,
    }
}
