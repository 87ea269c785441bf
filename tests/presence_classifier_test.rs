// ABOUTME: Integration tests for required-field presence classification
// ABOUTME: Covers every presence combination of calories, protein, carbs, and fat
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use forkful::intelligence::nutrition::classify_presence;
use forkful::models::{MacroField, NutrientSet, RecommendedAction};

fn set_from_mask(mask: u8) -> NutrientSet {
    let pick = |bit: u8, value: f64| (mask & bit != 0).then_some(value);
    NutrientSet {
        calories: pick(0b1000, 250.0),
        protein_g: pick(0b0100, 10.0),
        carbs_g: pick(0b0010, 30.0),
        fat_g: pick(0b0001, 8.0),
        ..NutrientSet::default()
    }
}

// ============================================================================
// Totality Over All Combinations
// ============================================================================

#[test]
fn test_every_presence_combination_has_documented_outcome() {
    // mask bits: calories, protein, carbs, fat
    let table: [(u8, RecommendedAction); 16] = [
        (0b0000, RecommendedAction::Skip),
        (0b0001, RecommendedAction::Manual),
        (0b0010, RecommendedAction::Manual),
        (0b0011, RecommendedAction::Manual),
        (0b0100, RecommendedAction::Manual),
        (0b0101, RecommendedAction::Manual),
        (0b0110, RecommendedAction::Manual),
        (0b0111, RecommendedAction::Estimate),
        (0b1000, RecommendedAction::Manual),
        (0b1001, RecommendedAction::Manual),
        (0b1010, RecommendedAction::Manual),
        (0b1011, RecommendedAction::Estimate),
        (0b1100, RecommendedAction::Manual),
        (0b1101, RecommendedAction::Estimate),
        (0b1110, RecommendedAction::Estimate),
        (0b1111, RecommendedAction::Import),
    ];

    for (mask, expected) in table {
        let result = classify_presence(&set_from_mask(mask));
        assert_eq!(
            result.recommended_action, expected,
            "mask {mask:04b} classified as {:?}",
            result.recommended_action
        );
        assert_eq!(
            result.can_estimate,
            expected == RecommendedAction::Estimate,
            "mask {mask:04b} can_estimate mismatch"
        );
        assert_eq!(
            result.is_valid(),
            matches!(expected, RecommendedAction::Import | RecommendedAction::Estimate)
        );
        assert_eq!(result.missing_macros.len(), 4 - mask.count_ones() as usize);
    }
}

#[test]
fn test_presence_flags_follow_fields() {
    let result = classify_presence(&set_from_mask(0b1010));
    assert!(result.has_calories);
    assert!(!result.has_protein);
    assert!(result.has_carbs);
    assert!(!result.has_fat);
    assert_eq!(
        result.missing_macros,
        vec![MacroField::ProteinG, MacroField::FatG]
    );
}

// ============================================================================
// Zero Is A Measured Value
// ============================================================================

#[test]
fn test_all_zero_record_is_complete() {
    let zeros = NutrientSet {
        calories: Some(0.0),
        protein_g: Some(0.0),
        carbs_g: Some(0.0),
        fat_g: Some(0.0),
        ..NutrientSet::default()
    };
    let result = classify_presence(&zeros);

    assert_eq!(result.recommended_action, RecommendedAction::Import);
    assert!(result.missing_macros.is_empty());
}

#[test]
fn test_optional_fields_do_not_count() {
    let only_extras = NutrientSet {
        fiber_g: Some(3.0),
        sugar_g: Some(12.0),
        sodium_mg: Some(140.0),
        ..NutrientSet::default()
    };
    assert_eq!(
        classify_presence(&only_extras).recommended_action,
        RecommendedAction::Skip
    );
}
