// ABOUTME: Main library entry point for the Forkful nutrition engine
// ABOUTME: Normalizes external nutrient records, validates them, and converts logged servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

#![deny(unsafe_code)]

//! # Forkful
//!
//! Nutrition normalization and serving-unit conversion for a personal
//! food log.
//!
//! ## Features
//!
//! - **Normalization**: `FoodData` Central label and itemized nutrient
//!   records become one canonical nutrient set with a basis tag
//! - **Validation**: records are accepted, completed by energy-balance
//!   estimation of one missing field, or rejected
//! - **Conversion**: logged items switch between servings and grams without
//!   losing their per-serving weight
//!
//! ## Architecture
//!
//! - **Core** (`forkful-core`): errors, constants, rounding, and models
//! - **Intelligence**: the nutrition engine
//! - **External**: external record shapes
//! - **Config**: validation settings with environment overrides
//!
//! ## Example Usage
//!
//! ```rust
//! use forkful::config::ValidationConfig;
//! use forkful::external::ExternalNutrientRecord;
//! use forkful::intelligence::nutrition::{import_external_record, switch_unit};
//! use forkful::models::{BaseUnit, FoodLogItem};
//!
//! let record: ExternalNutrientRecord = serde_json::from_str(
//!     r#"{"servingSize": 40, "servingSizeUnit": "g",
//!         "labelNutrients": {"calories": {"value": 190}, "protein": {"value": 4},
//!                            "carbohydrates": {"value": 28}, "fat": {"value": 7}}}"#,
//! )?;
//! let nutrition = import_external_record(&record, &ValidationConfig::default())?;
//! let item = FoodLogItem::from_nutrition("Granola", &nutrition, record.serving_weight_grams())?;
//!
//! let in_grams = item.clone().apply_edit(switch_unit(&item, BaseUnit::Grams));
//! assert_eq!(in_grams.quantity, 40.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Configuration management with environment overrides
pub mod config;

/// External nutrient record formats
pub mod external;

/// Nutrition analysis engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Unified error handling (re-exported from `forkful-core`)
pub use forkful_core::errors;

/// Domain constants (re-exported from `forkful-core`)
pub use forkful_core::constants;

/// Rounding helpers (re-exported from `forkful-core`)
pub use forkful_core::rounding;

/// Data models (re-exported from `forkful-core`)
pub use forkful_core::models;
