// ABOUTME: Validation and inference orchestration for normalized nutrition records
// ABOUTME: Classifies, estimates at most one field, and rejects energy-inconsistent records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! Validation-and-inference orchestrator
//!
//! A record either comes out with all four required fields populated and
//! `completeness = complete`, or is rejected with a [`NutritionRejection`].
//! Rejections are terminal: the inputs are deterministic, so a retry on the
//! same record cannot succeed.
//!
//! Every accepted record passes the energy-balance consistency check,
//! whether its values were provided or estimated.

use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use super::estimator::estimate_missing_field;
use super::normalizer::normalize;
use super::presence::classify_presence;
use crate::config::ValidationConfig;
use crate::constants::energy::ENERGY_DENSITY;
use crate::errors::{AppError, ErrorCode};
use crate::external::fdc::ExternalNutrientRecord;
use crate::models::{Completeness, MacroField, NormalizedNutrition, RecommendedAction};

/// Why an external record cannot be logged
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionRejection {
    /// No calorie or macro value is present
    #[error("no nutrition data in record")]
    NoNutritionData,

    /// More fields are missing than can be safely inferred
    #[error("too many missing fields to estimate: {}", format_fields(.missing))]
    UnderDetermined {
        /// Absent required fields
        missing: Vec<MacroField>,
    },

    /// Stated calories disagree with the macro energy balance
    #[error(
        "calories inconsistent with macros: expected {expected_calories} kcal, \
         record states {reported_calories} kcal (tolerance {tolerance} kcal)"
    )]
    Inconsistent {
        /// Rounded Atwater energy of the macros
        expected_calories: f64,
        /// Calories carried by the record
        reported_calories: f64,
        /// Allowed difference
        tolerance: f64,
    },
}

fn format_fields(fields: &[MacroField]) -> String {
    fields
        .iter()
        .map(MacroField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl NutritionRejection {
    /// Error code for this rejection class
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NoNutritionData => ErrorCode::NutritionUnavailable,
            Self::UnderDetermined { .. } => ErrorCode::NutritionIncomplete,
            Self::Inconsistent { .. } => ErrorCode::NutritionInconsistent,
        }
    }
}

impl From<NutritionRejection> for AppError {
    fn from(rejection: NutritionRejection) -> Self {
        let details = match &rejection {
            NutritionRejection::NoNutritionData => json!({}),
            NutritionRejection::UnderDetermined { missing } => json!({ "missing": missing }),
            NutritionRejection::Inconsistent {
                expected_calories,
                reported_calories,
                tolerance,
            } => json!({
                "expected_calories": expected_calories,
                "reported_calories": reported_calories,
                "tolerance": tolerance,
            }),
        };
        Self::new(rejection.error_code(), rejection.to_string()).with_details(details)
    }
}

/// Check stated calories against the macro energy balance
///
/// # Errors
///
/// Returns `NutritionRejection::Inconsistent` when the difference exceeds
/// the configured tolerance, and `UnderDetermined` if any required field is
/// still absent
pub fn check_consistency(
    nutrition: &NormalizedNutrition,
    config: &ValidationConfig,
) -> Result<(), NutritionRejection> {
    let (calories, protein, carbs, fat) =
        nutrition
            .nutrients
            .complete_macros()
            .ok_or_else(|| NutritionRejection::UnderDetermined {
                missing: classify_presence(&nutrition.nutrients).missing_macros,
            })?;

    let expected_calories = ENERGY_DENSITY.rounded_calories_from_macros(protein, carbs, fat);
    let tolerance = config.tolerance_for(calories);
    if (expected_calories - calories).abs() > tolerance {
        return Err(NutritionRejection::Inconsistent {
            expected_calories,
            reported_calories: calories,
            tolerance,
        });
    }
    Ok(())
}

fn infer(mut nutrition: NormalizedNutrition) -> Result<NormalizedNutrition, NutritionRejection> {
    if nutrition.completeness == Completeness::Empty {
        return Err(NutritionRejection::NoNutritionData);
    }

    let presence = classify_presence(&nutrition.nutrients);
    match presence.recommended_action {
        RecommendedAction::Import => Ok(nutrition),
        RecommendedAction::Skip => Err(NutritionRejection::NoNutritionData),
        RecommendedAction::Manual => Err(NutritionRejection::UnderDetermined {
            missing: presence.missing_macros,
        }),
        RecommendedAction::Estimate => {
            let (field, value) = estimate_missing_field(&nutrition.nutrients).ok_or(
                NutritionRejection::UnderDetermined {
                    missing: presence.missing_macros,
                },
            )?;
            nutrition.nutrients.set_macro(field, value);
            nutrition.estimated_fields.push(field);
            nutrition.used_inference = true;
            nutrition.completeness = Completeness::Complete;
            Ok(nutrition)
        }
    }
}

/// Validate a normalized record and fill at most one missing field
///
/// # Errors
///
/// Returns a [`NutritionRejection`] when the record has no data, misses
/// more than one inferable field, or fails the consistency check
pub fn validate_and_infer(
    nutrition: NormalizedNutrition,
    config: &ValidationConfig,
) -> Result<NormalizedNutrition, NutritionRejection> {
    let result = infer(nutrition).and_then(|accepted| {
        check_consistency(&accepted, config)?;
        Ok(accepted)
    });

    match &result {
        Ok(accepted) => debug!(
            nutrition.basis = ?accepted.basis,
            nutrition.estimated = ?accepted.estimated_fields,
            "Nutrition record accepted"
        ),
        Err(NutritionRejection::Inconsistent {
            expected_calories,
            reported_calories,
            tolerance,
        }) => warn!(
            nutrition.expected_kcal = expected_calories,
            nutrition.reported_kcal = reported_calories,
            nutrition.tolerance_kcal = tolerance,
            "Nutrition record rejected: calories inconsistent with macros"
        ),
        Err(NutritionRejection::UnderDetermined { missing }) => warn!(
            nutrition.missing = ?missing,
            "Nutrition record rejected: too many missing fields"
        ),
        Err(rejection) => warn!(
            nutrition.code = ?rejection.error_code(),
            "Nutrition record rejected: {rejection}"
        ),
    }

    result
}

/// Normalize an external record and validate it
///
/// This is the entry point the import path calls for fetched records.
///
/// # Errors
///
/// Returns a [`NutritionRejection`] when the record cannot be logged
pub fn import_external_record(
    record: &ExternalNutrientRecord,
    config: &ValidationConfig,
) -> Result<NormalizedNutrition, NutritionRejection> {
    debug!(record = %record.resource_id(), "Importing external nutrition record");
    validate_and_infer(normalize(record), config)
}
