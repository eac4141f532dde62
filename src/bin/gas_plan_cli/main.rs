// ABOUTME: gas-plan - command-line front end for the dive gas planner
// ABOUTME: Computes SCR, gas plans, MOD and team turn pressures, and lists the catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # SCR from a logged dive: 2000 psi in 50 min at 66 ft on double AL80s
//! gas-plan scr --start 3000 --end 1000 --time 50 --depth 66 --tank "Double AL80"
//!
//! # Gas plan with the modified rule of thirds
//! gas-plan plan --depth 60 --scr 0.5 --start 3100 --tank "Double AL80" --strategy modified
//!
//! # Same plan in metric units, as JSON
//! gas-plan --units metric --json plan --depth 20 --scr 15 --start 210 --tank "Double AL80"
//!
//! # Maximum operating depth of Nitrox 32, or of a custom 28% mix at 1.4
//! gas-plan mod --gas "Nitrox 32"
//! gas-plan mod --o2 28 --ppo2 1.4
//!
//! # Team turn pressures
//! gas-plan team 3000 2800
//!
//! # Catalogs
//! gas-plan tanks
//! gas-plan gases
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use dive_gas_planner::config::PlannerConfig;
use dive_gas_planner::logging::LoggingConfig;
use dive_gas_planner::{AppError, AppResult, GasStrategy, UnitSystem};
use std::process::ExitCode;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "gas-plan",
    about = "Dive gas planning calculator",
    long_about = "Computes surface consumption rate, minimum gas, turn pressure, dive duration and maximum operating depth in imperial or metric units."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Display unit system (defaults to DIVE_UNIT_SYSTEM, then imperial)
    #[arg(long, global = true)]
    units: Option<UnitSystem>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Surface consumption rate from a logged segment
    Scr {
        /// Start pressure (psi or bar)
        #[arg(long)]
        start: f64,

        /// End pressure (psi or bar)
        #[arg(long)]
        end: f64,

        /// Segment time in minutes
        #[arg(long)]
        time: f64,

        /// Average depth (ft or m)
        #[arg(long)]
        depth: f64,

        /// Catalog tank name (defaults to DIVE_DEFAULT_TANK)
        #[arg(long, conflicts_with = "factor")]
        tank: Option<String>,

        /// Tank factor, cu ft per 100 psi
        #[arg(long)]
        factor: Option<f64>,
    },

    /// Minimum gas, turn pressure and duration for a dive
    Plan {
        /// Maximum depth (ft or m)
        #[arg(long)]
        depth: f64,

        /// Surface consumption rate (cu ft/min or L/min)
        #[arg(long)]
        scr: f64,

        /// Start pressure (psi or bar, defaults to the tank's rated pressure)
        #[arg(long)]
        start: Option<f64>,

        /// Catalog tank name (defaults to DIVE_DEFAULT_TANK)
        #[arg(long)]
        tank: Option<String>,

        /// Gas strategy: all, half, third, modified
        #[arg(long)]
        strategy: Option<GasStrategy>,
    },

    /// Maximum operating depth of a gas
    Mod {
        /// Oxygen percentage
        #[arg(long, conflicts_with = "gas")]
        o2: Option<f64>,

        /// Standard gas name, e.g. "Nitrox 32"
        #[arg(long)]
        gas: Option<String>,

        /// PPO2 limit in bar (defaults to DIVE_PPO2_LIMIT)
        #[arg(long)]
        ppo2: Option<f64>,
    },

    /// Turn pressures for a team, controlled by the lowest start pressure
    Team {
        /// Start pressure of each diver (psi or bar)
        #[arg(required = true)]
        pressures: Vec<f64>,
    },

    /// List catalog tanks
    Tanks,

    /// List standard gases with their MODs
    Gases,
}

/// Settings shared by every command
pub struct Context {
    /// Display unit system
    pub unit_system: UnitSystem,
    /// Print JSON instead of text
    pub json: bool,
    /// Planner defaults
    pub config: PlannerConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env().with_level(log_level).init() {
        eprintln!("Logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.code.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PlannerConfig::from_env();
    config.validate_limits().map_err(AppError::from)?;
    debug!(?config, "Planner configuration loaded");

    let context = Context {
        unit_system: cli.units.unwrap_or(config.unit_system),
        json: cli.json,
        config,
    };

    match cli.command {
        Command::Scr {
            start,
            end,
            time,
            depth,
            tank,
            factor,
        } => commands::scr::run(&context, start, end, time, depth, tank.as_deref(), factor),
        Command::Plan {
            depth,
            scr,
            start,
            tank,
            strategy,
        } => commands::plan::run(&context, depth, scr, start, tank.as_deref(), strategy),
        Command::Mod { o2, gas, ppo2 } => commands::mix::run(&context, o2, gas.as_deref(), ppo2),
        Command::Team { pressures } => commands::team::run(&context, &pressures),
        Command::Tanks => commands::catalog::tanks(&context),
        Command::Gases => commands::catalog::gases(&context),
    }
}
