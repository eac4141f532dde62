// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: JSON output helper for gas-plan
// ABOUTME: Serializes command reports to pretty-printed JSON on stdout

use dive_gas_planner::AppResult;
use serde::Serialize;

/// Print a report as pretty JSON
pub fn print_json<T: Serialize>(report: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(report)?;
    println!("{rendered}");
    Ok(())
}
