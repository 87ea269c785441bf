// ABOUTME: Presence classification of the four required calorie and macro fields
// ABOUTME: Decides whether a partial record is importable, estimable, manual-entry, or unusable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use crate::models::{MacroField, NutrientSet, RecommendedAction, ValidationResult};

/// Classify which required fields are present and what to do next
///
/// Zero is a measured value: only absent fields count as missing.
#[must_use]
pub fn classify_presence(nutrients: &NutrientSet) -> ValidationResult {
    let has_calories = nutrients.calories.is_some();
    let has_protein = nutrients.protein_g.is_some();
    let has_carbs = nutrients.carbs_g.is_some();
    let has_fat = nutrients.fat_g.is_some();

    let present_macros = [has_protein, has_carbs, has_fat]
        .iter()
        .filter(|present| **present)
        .count();
    let total_present = present_macros + usize::from(has_calories);

    let can_estimate_calories = !has_calories && present_macros == 3;
    let can_estimate_macro = has_calories && present_macros == 2;
    let can_estimate = can_estimate_calories || can_estimate_macro;

    let recommended_action = match total_present {
        0 => RecommendedAction::Skip,
        n if n >= 4 => RecommendedAction::Import,
        n if n >= 2 && can_estimate => RecommendedAction::Estimate,
        _ => RecommendedAction::Manual,
    };

    let missing_macros = MacroField::ALL
        .into_iter()
        .filter(|field| nutrients.macro_value(*field).is_none())
        .collect();

    ValidationResult {
        has_calories,
        has_protein,
        has_carbs,
        has_fat,
        missing_macros,
        can_estimate,
        recommended_action,
    }
}
