// ABOUTME: Breathing-gas mix described by oxygen and helium percentages
// ABOUTME: Nitrogen is the balance; construction validates the fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Upper bound of a gas percentage
const FULL_PERCENT: f64 = 100.0;

/// An open-circuit breathing gas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasMix {
    /// Display name, e.g. "Nitrox 32" or "TriMix 18/45"
    pub name: Cow<'static, str>,
    /// Oxygen percentage (0-100)
    pub o2_percent: f64,
    /// Helium percentage (0-100)
    pub he_percent: f64,
}

impl GasMix {
    /// Catalog constructor, unchecked
    #[must_use]
    pub const fn standard(name: &'static str, o2_percent: f64, he_percent: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            o2_percent,
            he_percent,
        }
    }

    /// Build a custom mix
    ///
    /// # Errors
    ///
    /// Returns `AppError::out_of_range` if either percentage lies outside 0-100
    /// or the two together exceed 100.
    pub fn new(name: impl Into<String>, o2_percent: f64, he_percent: f64) -> AppResult<Self> {
        if !(0.0..=FULL_PERCENT).contains(&o2_percent) {
            return Err(AppError::out_of_range(format!(
                "Oxygen must be between 0 and 100 percent, got {o2_percent}"
            ))
            .with_field("o2_percent"));
        }
        if !(0.0..=FULL_PERCENT).contains(&he_percent) {
            return Err(AppError::out_of_range(format!(
                "Helium must be between 0 and 100 percent, got {he_percent}"
            ))
            .with_field("he_percent"));
        }
        if o2_percent + he_percent > FULL_PERCENT {
            return Err(AppError::out_of_range(format!(
                "Oxygen and helium add up to {}, more than 100 percent",
                o2_percent + he_percent
            )));
        }

        Ok(Self {
            name: Cow::Owned(name.into()),
            o2_percent,
            he_percent,
        })
    }

    /// Nitrogen percentage (balance gas)
    #[must_use]
    pub fn n2_percent(&self) -> f64 {
        FULL_PERCENT - self.o2_percent - self.he_percent
    }

    /// Whether the mix contains helium
    #[must_use]
    pub fn is_trimix(&self) -> bool {
        self.he_percent > 0.0
    }
}
