// ABOUTME: Intelligence module for nutrition data analysis
// ABOUTME: Hosts the nutrition normalization and serving conversion engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! # Intelligence Module
//!
//! Analysis of imported and logged nutrition data.

/// Nutrition normalization, validation, and serving conversion
pub mod nutrition;

pub use nutrition::{
    classify_presence, edit_serving, import_external_record, normalize, switch_unit,
    validate_and_infer, NutritionRejection,
};
