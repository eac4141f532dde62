// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for gas-plan
// ABOUTME: Provides access to SCR, plan, MOD, team and catalog commands

pub mod catalog;
pub mod inputs;
pub mod mix;
pub mod plan;
pub mod scr;
pub mod team;
