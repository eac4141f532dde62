// ABOUTME: Core types and constants for the dive gas planner
// ABOUTME: Foundation crate with error handling, unit constants, reference catalogs and models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dive Gas Core
//!
//! Foundation crate providing shared types and reference data for the dive gas
//! planner. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Conversion factors, seawater physics, and the tank/gas catalogs
//! - **models**: `UnitSystem`, `Tank`, `GasMix` and `GasStrategy`

/// Unified error handling system with standard error codes
pub mod errors;

/// Conversion factors, physical constants and reference catalogs
pub mod constants;

/// Core data models (unit systems, tanks, gas mixes, gas strategies)
pub mod models;

pub use constants::catalog::{find_gas, find_tank, STANDARD_GASES, TANKS};
pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{GasMix, GasStrategy, Tank, UnitSystem};
