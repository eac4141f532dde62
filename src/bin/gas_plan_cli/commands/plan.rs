// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Plan command computing minimum gas, turn pressure and duration
// ABOUTME: Fills unset options from the planner config and the tank's rated pressure

use crate::helpers::display::{self, DisplayPlan, PlanReport};
use crate::helpers::output;
use crate::{Context, Result};
use dive_gas_planner::planning::{calc_gas_plan, GasPlanInput};
use dive_gas_planner::units::to_display_pressure;
use dive_gas_planner::GasStrategy;
use super::inputs;
use tracing::debug;

pub fn run(
    context: &Context,
    depth: f64,
    scr: f64,
    start: Option<f64>,
    tank: Option<&str>,
    strategy: Option<GasStrategy>,
) -> Result<()> {
    let depth = inputs::non_negative(depth, "depth", "Depth")?;
    let scr = inputs::positive(scr, "scr", "SCR")?;

    let tank = inputs::resolve_tank(&context.config, tank)?.clone();
    let start_pressure = inputs::positive(
        start.unwrap_or_else(|| to_display_pressure(tank.pressure, context.unit_system)),
        "start",
        "Start pressure",
    )?;

    let input = GasPlanInput {
        depth,
        scr,
        start_pressure,
        tank,
        gas_strategy: strategy.unwrap_or(context.config.gas_strategy),
        unit_system: context.unit_system,
    };
    debug!(?input, "Planning dive");

    let result = calc_gas_plan(&input);
    let report = PlanReport {
        strategy_description: input.gas_strategy.description(),
        display: DisplayPlan::from_result(&result, context.unit_system),
        input,
        result,
    };

    if context.json {
        output::print_json(&report)
    } else {
        display::display_plan(&report);
        Ok(())
    }
}
