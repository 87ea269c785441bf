// ABOUTME: Nutrition normalization, validation, and serving-unit conversion engine
// ABOUTME: Presence classifier, energy-balance estimator, normalizer, orchestrator, and converter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! # Nutrition Engine
//!
//! Pure, synchronous functions over immutable inputs. Data flows one way:
//!
//! 1. [`normalize`] maps an external record to a [`NormalizedNutrition`]
//! 2. [`validate_and_infer`] accepts it (estimating at most one field) or
//!    rejects it with a [`NutritionRejection`]
//! 3. an accepted record becomes a [`FoodLogItem`] via
//!    [`FoodLogItem::from_nutrition`]
//! 4. later quantity/unit edits go through [`edit_serving`] and
//!    [`switch_unit`] only
//!
//! Results are adopted whole: a [`ServingEditResult`] replaces every
//! numeric field of the item it was computed from.
//!
//! [`NormalizedNutrition`]: crate::models::NormalizedNutrition
//! [`FoodLogItem`]: crate::models::FoodLogItem
//! [`FoodLogItem::from_nutrition`]: crate::models::FoodLogItem::from_nutrition
//! [`ServingEditResult`]: crate::models::ServingEditResult

/// Single-field energy-balance estimation
pub mod estimator;
/// External record normalization
pub mod normalizer;
/// Required-field presence classification
pub mod presence;
/// Serving/gram quantity conversion
pub mod serving;
/// Validation and inference orchestration
pub mod validation;

pub use estimator::{apply_energy_balance, energy_density, estimate_missing_field};
pub use normalizer::{
    extract_itemized, extract_label, normalize, ExtractorStrategy, FieldExtractor,
    FIELD_EXTRACTORS,
};
pub use presence::classify_presence;
pub use serving::{edit_serving, reference_serving_weight, switch_unit};
pub use validation::{
    check_consistency, import_external_record, validate_and_infer, NutritionRejection,
};
