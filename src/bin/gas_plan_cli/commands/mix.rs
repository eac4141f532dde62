// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: MOD command for a standard gas or a custom oxygen percentage
// ABOUTME: Reports the MOD at the working and contingency PPO2 limits

use crate::helpers::display::{self, ModReport};
use crate::helpers::output;
use crate::{Context, Result};
use dive_gas_planner::constants::physics::MAX_PPO2_LIMIT;
use dive_gas_planner::mix::mod_for_gas;
use dive_gas_planner::{find_gas, AppError, GasMix};

pub fn run(context: &Context, o2: Option<f64>, gas: Option<&str>, ppo2: Option<f64>) -> Result<()> {
    let (mix, named) = match (gas, o2) {
        (Some(name), _) => (find_gas(name)?.clone(), true),
        (None, Some(o2)) => (GasMix::new(format!("{o2}% O2"), o2, 0.0)?, false),
        (None, None) => return Err(AppError::missing_field("o2")),
    };

    let ppo2_limit = ppo2.unwrap_or(context.config.ppo2_limit);
    if ppo2_limit.is_nan() || ppo2_limit <= 0.0 || ppo2_limit > MAX_PPO2_LIMIT {
        return Err(AppError::out_of_range(format!(
            "PPO2 limit must be in (0, {MAX_PPO2_LIMIT}]"
        ))
        .with_field("ppo2"));
    }
    let contingency_ppo2_limit = context.config.contingency_ppo2_limit.max(ppo2_limit);

    let report = ModReport {
        unit_system: context.unit_system,
        gas: named.then(|| mix.name.to_string()),
        o2_percent: mix.o2_percent,
        ppo2_limit,
        mod_depth: mod_for_gas(&mix, ppo2_limit, context.unit_system),
        contingency_ppo2_limit,
        contingency_mod_depth: mod_for_gas(&mix, contingency_ppo2_limit, context.unit_system),
    };

    if context.json {
        output::print_json(&report)
    } else {
        display::display_mod(&report);
        Ok(())
    }
}
