// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: SCR command for deriving a surface consumption rate from a logged segment
// ABOUTME: Resolves the tank factor from --factor or the catalog and prints the rate

use crate::helpers::display::{self, ScrReport};
use crate::helpers::output;
use crate::{Context, Result};
use dive_gas_planner::planning::{calc_scr, ScrInput};
use dive_gas_planner::units::to_display_volume;
use dive_gas_planner::AppError;
use super::inputs;

pub fn run(
    context: &Context,
    start: f64,
    end: f64,
    time: f64,
    depth: f64,
    tank: Option<&str>,
    factor: Option<f64>,
) -> Result<()> {
    let depth = inputs::non_negative(depth, "depth", "Depth")?;
    let tank_factor = match factor {
        Some(factor) => inputs::positive(factor, "factor", "Tank factor")?,
        None => inputs::resolve_tank(&context.config, tank)?.factor,
    };

    let input = ScrInput {
        start_psi: Some(start),
        end_psi: Some(end),
        time: Some(time),
        depth: Some(depth),
        tank_factor,
        unit_system: context.unit_system,
    };

    let scr = calc_scr(&input).ok_or_else(|| {
        AppError::out_of_range("Segment time must be greater than zero").with_field("time")
    })?;

    let report = ScrReport {
        unit_system: context.unit_system,
        tank_factor,
        scr_cu_ft: scr,
        scr_display: to_display_volume(scr, context.unit_system),
    };

    if context.json {
        output::print_json(&report)
    } else {
        display::display_scr(&report);
        Ok(())
    }
}
