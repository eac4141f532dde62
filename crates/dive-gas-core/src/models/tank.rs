// ABOUTME: Cylinder record with nominal capacity, rated pressure and practitioner tank factor
// ABOUTME: Static catalog entries borrow their names, caller-supplied tanks own them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::physics::TANK_FACTOR_PRESSURE_PSI;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A cylinder (or manifolded doubles) configuration
///
/// All fields are in internal units. `factor` is the authoritative tank factor
/// (cu ft delivered per 100 PSI) used in every volume calculation; it is the
/// practitioner-rounded value and need not equal [`Tank::nominal_factor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    /// Catalog name, e.g. "AL80" or "Double HP100"
    pub name: Cow<'static, str>,
    /// Nominal gas capacity at rated pressure (cu ft)
    pub capacity: f64,
    /// Rated fill pressure (PSI)
    pub pressure: f64,
    /// Tank factor (cu ft per 100 PSI)
    pub factor: f64,
}

impl Tank {
    /// Catalog constructor
    #[must_use]
    pub const fn new(name: &'static str, capacity: f64, pressure: f64, factor: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            capacity,
            pressure,
            factor,
        }
    }

    /// Ad-hoc tank supplied by a caller
    #[must_use]
    pub fn custom(name: impl Into<String>, capacity: f64, pressure: f64, factor: f64) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            capacity,
            pressure,
            factor,
        }
    }

    /// Gas volume (cu ft) delivered by a pressure drop of `psi`
    ///
    /// AL80 at 1000 PSI: `(1000 / 100) * 2.5 = 25` cu ft.
    #[must_use]
    pub fn volume_at(&self, psi: f64) -> f64 {
        (psi / TANK_FACTOR_PRESSURE_PSI) * self.factor
    }

    /// Pressure drop (PSI) that delivers `volume` cu ft
    #[must_use]
    pub fn pressure_for(&self, volume: f64) -> f64 {
        (volume / self.factor) * TANK_FACTOR_PRESSURE_PSI
    }

    /// Unrounded factor derived from capacity and rated pressure
    #[must_use]
    pub fn nominal_factor(&self) -> f64 {
        (self.capacity / self.pressure) * TANK_FACTOR_PRESSURE_PSI
    }
}
