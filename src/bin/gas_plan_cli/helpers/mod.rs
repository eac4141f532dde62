// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for gas-plan
// ABOUTME: Provides display formatting and JSON output utilities

pub mod display;
pub mod output;
