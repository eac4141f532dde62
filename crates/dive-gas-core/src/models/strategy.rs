// ABOUTME: Gas-management strategies deciding how much gas above the reserve is usable
// ABOUTME: Implements all-usable, half, thirds and the modified rule of thirds selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gas-management strategy applied on top of the minimum-gas reserve
///
/// - `All`: every PSI above minimum gas is usable (open water, no overhead)
/// - `Half`: half of the usable gas goes out, half comes back
/// - `Third`: one third out, one third back, one third for the team
/// - `Modified`: GUE Intro to Cave modified thirds, derived from the start
///   pressure rounded down to a 300 PSI lattice rather than from usable gas
///
/// `Third` and `Modified` are separate rules with separate results and are
/// never interchangeable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GasStrategy {
    /// Use all gas above minimum gas
    All,
    /// Rule of halves
    Half,
    /// Rule of thirds applied to usable gas
    #[default]
    Third,
    /// Modified rule of thirds (300 PSI reserve lattice)
    Modified,
}

impl GasStrategy {
    /// Every strategy, in presentation order
    pub const ALL: [Self; 4] = [Self::All, Self::Half, Self::Third, Self::Modified];

    /// Get strategy name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Half => "half",
            Self::Third => "third",
            Self::Modified => "modified",
        }
    }

    /// Get strategy description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::All => "All usable gas (start - min gas)",
            Self::Half => "Rule of halves: floor(usable / 2)",
            Self::Third => "Rule of thirds: floor(usable / 3)",
            Self::Modified => {
                "Modified thirds: floor((start - floor(start / 300) * 300 / 3) / 3)"
            }
        }
    }

    /// Whether the allotment is one leg of an out-and-back profile
    ///
    /// Duration estimates count twice the allotment for these strategies.
    #[must_use]
    pub const fn is_out_and_back(&self) -> bool {
        !matches!(self, Self::All)
    }
}

impl fmt::Display for GasStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GasStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "half" | "halves" => Ok(Self::Half),
            "third" | "thirds" => Ok(Self::Third),
            "modified" | "modified_thirds" => Ok(Self::Modified),
            other => Err(AppError::invalid_input(format!(
                "Unknown gas strategy: '{other}'. Valid options: all, half, third, modified"
            ))
            .with_field("gas_strategy")),
        }
    }
}
