// ABOUTME: Team rule-of-thirds planning driven by the diver with the least gas
// ABOUTME: Every diver turns after breathing the controlling diver's penetration allotment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Turn pressures for a team with similar cylinders (PSI)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPlan {
    /// Lowest start pressure in the team
    pub controlling_psi: f64,
    /// Reserve held back from the controlling pressure
    pub reserve_psi: f64,
    /// Controlling pressure minus the reserve
    pub usable_psi: f64,
    /// Pressure each diver may breathe before turning
    pub penetration_psi: f64,
    /// Turn pressure per diver, in the order the start pressures were given
    pub turn_pressures: Vec<f64>,
}

/// Team turn pressures from each diver's start pressure (PSI)
///
/// With 3000 and 2800 PSI the controlling diver holds back 933, may use 1867,
/// and the team penetrates 622 PSI: turns at 2378 and 2178. Returns `None`
/// for an empty team.
#[must_use]
pub fn calc_team_turn_pressures(start_pressures_psi: &[f64]) -> Option<TeamPlan> {
    let controlling_psi = start_pressures_psi.iter().copied().reduce(f64::min)?;

    let reserve_psi = (controlling_psi / 3.0).floor();
    let usable_psi = controlling_psi - reserve_psi;
    let penetration_psi = (usable_psi / 3.0).floor();

    let turn_pressures = start_pressures_psi
        .iter()
        .map(|start| start - penetration_psi)
        .collect();

    debug!(
        divers = start_pressures_psi.len(),
        controlling_psi,
        penetration_psi,
        "Team turn pressures calculated"
    );
    Some(TeamPlan {
        controlling_psi,
        reserve_psi,
        usable_psi,
        penetration_psi,
        turn_pressures,
    })
}
