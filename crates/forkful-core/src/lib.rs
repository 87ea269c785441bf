// ABOUTME: Core types and constants for the Forkful nutrition engine
// ABOUTME: Foundation crate with error handling, energy-density constants, rounding, and models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

#![deny(unsafe_code)]

//! # Forkful Core
//!
//! Foundation crate providing shared types and constants for the Forkful
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy-density table and external nutrient identifiers
//! - **rounding**: Boundary rounding helpers shared by every computed result
//! - **models**: Nutrient sets, normalized nutrition, and food-log items

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Rounding helpers applied at result boundaries
pub mod rounding;

/// Core data models (`NutrientSet`, `FoodLogItem`, `NutritionLog`, etc.)
pub mod models;
