// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Catalog commands listing the built-in tanks and standard gases
// ABOUTME: Gas listings include the MOD at the configured PPO2 limit

use crate::helpers::display::{self, GasListing};
use crate::helpers::output;
use crate::{Context, Result};
use dive_gas_planner::mix::mod_for_gas;
use dive_gas_planner::{STANDARD_GASES, TANKS};

pub fn tanks(context: &Context) -> Result<()> {
    if context.json {
        output::print_json(&TANKS)
    } else {
        display::display_tanks(&TANKS, context.unit_system);
        Ok(())
    }
}

pub fn gases(context: &Context) -> Result<()> {
    let ppo2_limit = context.config.ppo2_limit;
    let listings: Vec<GasListing<'_>> = STANDARD_GASES
        .iter()
        .map(|gas| GasListing {
            gas,
            mod_depth: mod_for_gas(gas, ppo2_limit, context.unit_system),
        })
        .collect();

    if context.json {
        output::print_json(&listings)
    } else {
        display::display_gases(&listings, context.unit_system, ppo2_limit);
        Ok(())
    }
}
