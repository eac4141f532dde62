// ABOUTME: Unit system enumeration selecting imperial or metric display units
// ABOUTME: Provides parsing, display and unit labels for presentation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system used for values entering and leaving the presentation layer
///
/// Calculations run internally in feet, PSI and cubic feet. `Imperial` display
/// values are already internal; `Metric` display values are meters, bar and
/// liters. There is deliberately no `Default`: every conversion takes the
/// unit system explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet, PSI, cubic feet
    Imperial,
    /// Meters, bar, liters
    Metric,
}

impl UnitSystem {
    /// Get unit system name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Imperial => "imperial",
            Self::Metric => "metric",
        }
    }

    /// Whether display values are the internal units unchanged
    #[must_use]
    pub const fn is_imperial(&self) -> bool {
        matches!(self, Self::Imperial)
    }

    /// Label for cylinder pressure
    #[must_use]
    pub const fn pressure_label(&self) -> &'static str {
        match self {
            Self::Imperial => "psi",
            Self::Metric => "bar",
        }
    }

    /// Label for depth
    #[must_use]
    pub const fn depth_label(&self) -> &'static str {
        match self {
            Self::Imperial => "ft",
            Self::Metric => "m",
        }
    }

    /// Label for gas volume
    #[must_use]
    pub const fn volume_label(&self) -> &'static str {
        match self {
            Self::Imperial => "cu ft",
            Self::Metric => "L",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imperial" | "us" | "ft" => Ok(Self::Imperial),
            "metric" | "si" | "m" => Ok(Self::Metric),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system: '{other}'. Valid options: imperial, metric"
            ))
            .with_field("unit_system")),
        }
    }
}
