// ABOUTME: External nutrient record formats (USDA FoodData Central)
// ABOUTME: Already-fetched payload shapes consumed by the nutrition normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! External Records
//!
//! Fetching is owned by the lookup client outside this crate; these types
//! only describe what it hands over.

pub mod fdc;

pub use fdc::{ExternalNutrientRecord, FoodNutrient, LabelNutrients, LabelValue};
