// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Report types and text formatting helpers for gas-plan
// ABOUTME: Re-expresses internal PSI/cu ft results in the selected display units

use dive_gas_planner::planning::{GasPlanInput, PlanResult, TeamPlan};
use dive_gas_planner::units::{to_display_pressure, to_display_volume};
use dive_gas_planner::{GasMix, Tank, UnitSystem};
use serde::Serialize;

/// SCR command report
#[derive(Debug, Serialize)]
pub struct ScrReport {
    /// Display unit system
    pub unit_system: UnitSystem,
    /// Tank factor used (cu ft per 100 psi)
    pub tank_factor: f64,
    /// SCR in cu ft/min
    pub scr_cu_ft: f64,
    /// SCR in display units per minute
    pub scr_display: f64,
}

/// Plan values re-expressed in display units
#[derive(Debug, Serialize)]
pub struct DisplayPlan {
    /// Minimum gas (psi or bar)
    pub min_gas: f64,
    /// Turn pressure (psi or bar)
    pub turn_pressure: f64,
    /// Gas usable under the strategy (psi or bar)
    pub strategy_usable: f64,
    /// Gas volume usable under the strategy (cu ft or L)
    pub strategy_usable_vol: f64,
    /// Minimum gas volume (cu ft or L)
    pub min_gas_vol: f64,
}

impl DisplayPlan {
    /// Convert an internal-unit result for display
    #[must_use]
    pub fn from_result(result: &PlanResult, unit_system: UnitSystem) -> Self {
        Self {
            min_gas: to_display_pressure(result.min_gas_psi, unit_system),
            turn_pressure: to_display_pressure(result.turn_pressure, unit_system),
            strategy_usable: to_display_pressure(result.strategy_usable_psi, unit_system),
            strategy_usable_vol: to_display_volume(result.strategy_usable_vol, unit_system),
            min_gas_vol: to_display_volume(result.min_gas_vol, unit_system),
        }
    }
}

/// Plan command report
#[derive(Debug, Serialize)]
pub struct PlanReport {
    /// Inputs as given (display units)
    pub input: GasPlanInput,
    /// How the strategy derives its allotment
    pub strategy_description: &'static str,
    /// Result in internal units
    pub result: PlanResult,
    /// Result in display units
    pub display: DisplayPlan,
}

/// MOD command report
#[derive(Debug, Serialize)]
pub struct ModReport {
    /// Display unit system
    pub unit_system: UnitSystem,
    /// Gas name, if a standard gas was selected
    pub gas: Option<String>,
    /// Oxygen percentage
    pub o2_percent: f64,
    /// Working PPO2 limit (bar)
    pub ppo2_limit: f64,
    /// MOD at the working limit (ft or m)
    pub mod_depth: Option<f64>,
    /// Contingency PPO2 limit (bar)
    pub contingency_ppo2_limit: f64,
    /// MOD at the contingency limit (ft or m)
    pub contingency_mod_depth: Option<f64>,
}

/// Team command report
#[derive(Debug, Serialize)]
pub struct TeamReport {
    /// Display unit system
    pub unit_system: UnitSystem,
    /// Plan in psi
    pub plan: TeamPlan,
    /// Turn pressure per diver (psi or bar)
    pub turn_pressures_display: Vec<f64>,
}

/// Catalog gas with its MOD
#[derive(Debug, Serialize)]
pub struct GasListing<'a> {
    /// Catalog entry
    #[serde(flatten)]
    pub gas: &'a GasMix,
    /// MOD at the configured limit (ft or m)
    pub mod_depth: Option<f64>,
}

/// Display SCR result
pub fn display_scr(report: &ScrReport) {
    let units = report.unit_system;
    println!("\nSurface Consumption Rate");
    println!("{}", "=".repeat(40));
    println!(
        "   SCR: {:.2} {}/min",
        report.scr_display,
        units.volume_label()
    );
    if !units.is_imperial() {
        println!("        ({:.3} cu ft/min)", report.scr_cu_ft);
    }
    println!("   Tank factor: {:.1}", report.tank_factor);
}

/// Display a gas plan
pub fn display_plan(report: &PlanReport) {
    let units = report.input.unit_system;
    let pressure = units.pressure_label();
    let volume = units.volume_label();
    let display = &report.display;

    println!("\nGas Plan");
    println!("{}", "=".repeat(50));
    println!(
        "   Tank: {}   Strategy: {}",
        report.input.tank.name, report.input.gas_strategy
    );
    println!("   {}", report.strategy_description);
    println!(
        "   Depth: {:.0} {}   SCR: {:.2} {volume}/min   Start: {:.0} {pressure}",
        report.input.depth,
        units.depth_label(),
        report.input.scr,
        report.input.start_pressure
    );
    println!("{}", "-".repeat(50));
    println!(
        "   Minimum gas:   {:.0} {pressure} ({:.1} {volume})",
        display.min_gas, display.min_gas_vol
    );
    println!("   Turn pressure: {:.0} {pressure}", display.turn_pressure);
    println!(
        "   Usable:        {:.0} {pressure} ({:.1} {volume})",
        display.strategy_usable, display.strategy_usable_vol
    );
    println!(
        "   Duration:      {:.0} min at max depth, {:.0} min at average depth",
        report.result.expected_time_max, report.result.expected_time_avg
    );
}

/// Display a MOD result
pub fn display_mod(report: &ModReport) {
    let depth = report.unit_system.depth_label();
    let name = report
        .gas
        .clone()
        .unwrap_or_else(|| format!("{}% O2", report.o2_percent));

    println!("\nMaximum Operating Depth: {name}");
    println!("{}", "=".repeat(40));
    println!(
        "   PPO2 {:.1}: {}",
        report.ppo2_limit,
        format_depth(report.mod_depth, depth)
    );
    println!(
        "   PPO2 {:.1}: {}",
        report.contingency_ppo2_limit,
        format_depth(report.contingency_mod_depth, depth)
    );
}

/// Display team turn pressures
pub fn display_team(report: &TeamReport) {
    let units = report.unit_system;
    let pressure = units.pressure_label();

    println!("\nTeam Turn Pressures");
    println!("{}", "=".repeat(40));
    println!(
        "   Controlling: {:.0} {pressure}   Penetration: {:.0} {pressure}",
        to_display_pressure(report.plan.controlling_psi, units),
        to_display_pressure(report.plan.penetration_psi, units)
    );
    for (index, turn) in report.turn_pressures_display.iter().enumerate() {
        println!("   Diver {}: turn at {turn:.0} {pressure}", index + 1);
    }
}

/// Display the tank catalog
pub fn display_tanks(tanks: &[Tank], units: UnitSystem) {
    println!("\n{:<14} {:>10} {:>10} {:>8}", "Tank", "Capacity", "Pressure", "Factor");
    println!("{}", "=".repeat(45));
    for tank in tanks {
        println!(
            "{:<14} {:>7.0} {:<2} {:>6.0} {:<3} {:>8.1}",
            tank.name,
            to_display_volume(tank.capacity, units),
            short_volume_label(units),
            to_display_pressure(tank.pressure, units),
            units.pressure_label(),
            tank.factor
        );
    }
}

/// Display the standard gases
pub fn display_gases(gases: &[GasListing<'_>], units: UnitSystem, ppo2_limit: f64) {
    let mod_header = format!("MOD@{ppo2_limit:.1}");
    println!(
        "\n{:<14} {:>5} {:>5} {:>5} {mod_header:>10}",
        "Gas", "O2", "He", "N2"
    );
    println!("{}", "=".repeat(43));
    for listing in gases {
        println!(
            "{:<14} {:>5.0} {:>5.0} {:>5.0} {:>10}",
            listing.gas.name,
            listing.gas.o2_percent,
            listing.gas.he_percent,
            listing.gas.n2_percent(),
            format_depth(listing.mod_depth, units.depth_label())
        );
    }
}

fn format_depth(depth: Option<f64>, label: &str) -> String {
    depth.map_or_else(|| "undefined".to_owned(), |d| format!("{d:.0} {label}"))
}

const fn short_volume_label(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Imperial => "cf",
        UnitSystem::Metric => "L",
    }
}
