// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Team command computing turn pressures from each diver's start pressure
// ABOUTME: Converts display pressures to psi and back around the team plan

use crate::helpers::display::{self, TeamReport};
use crate::helpers::output;
use crate::{Context, Result};
use dive_gas_planner::planning::calc_team_turn_pressures;
use dive_gas_planner::units::{from_display_pressure, to_display_pressure};
use dive_gas_planner::AppError;
use super::inputs;

pub fn run(context: &Context, pressures: &[f64]) -> Result<()> {
    for pressure in pressures {
        inputs::positive(*pressure, "pressures", "Start pressures")?;
    }

    let pressures_psi: Vec<f64> = pressures
        .iter()
        .map(|pressure| from_display_pressure(*pressure, context.unit_system))
        .collect();
    let plan =
        calc_team_turn_pressures(&pressures_psi).ok_or_else(|| AppError::missing_field("pressures"))?;

    let report = TeamReport {
        unit_system: context.unit_system,
        turn_pressures_display: plan
            .turn_pressures
            .iter()
            .map(|turn| to_display_pressure(*turn, context.unit_system))
            .collect(),
        plan,
    };

    if context.json {
        output::print_json(&report)
    } else {
        display::display_team(&report);
        Ok(())
    }
}
