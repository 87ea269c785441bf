// ABOUTME: Integration tests for food log items created from accepted nutrition records
// ABOUTME: Import-to-log flow, wholesale edit application, and daily totals
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use chrono::NaiveDate;
use forkful::config::ValidationConfig;
use forkful::errors::ErrorCode;
use forkful::external::ExternalNutrientRecord;
use forkful::intelligence::nutrition::{edit_serving, import_external_record, switch_unit};
use forkful::models::{BaseUnit, FoodLogItem, MealEntry, MealType, NutritionLog};
use serde_json::json;

fn granola_record() -> ExternalNutrientRecord {
    serde_json::from_value(json!({
        "fdcId": 2_041_155,
        "description": "Granola, oats and honey",
        "servingSize": 40.0,
        "servingSizeUnit": "GRM",
        "labelNutrients": {
            "calories": { "value": 190 },
            "protein": { "value": 4 },
            "carbohydrates": { "value": 28 },
            "fat": { "value": 7 },
            "fiber": { "value": 3 },
            "sugars": { "value": 11 }
        }
    }))
    .unwrap()
}

fn logged_granola() -> FoodLogItem {
    let record = granola_record();
    let nutrition = import_external_record(&record, &ValidationConfig::default()).unwrap();
    FoodLogItem::from_nutrition(
        record.description.clone().unwrap(),
        &nutrition,
        record.serving_weight_grams(),
    )
    .unwrap()
}

// ============================================================================
// Import To Log
// ============================================================================

#[test]
fn test_imported_label_record_logs_one_serving() {
    let item = logged_granola();

    assert_eq!(item.name, "Granola, oats and honey");
    assert_eq!(item.base_unit, BaseUnit::Serving);
    assert_eq!(item.quantity, 1.0);
    assert_eq!(item.serving_grams, 40.0);
    assert_eq!(item.computed_total_grams(), 40.0);
    assert_eq!(item.calories, 190.0);
    assert_eq!(item.sugar_g, Some(11.0));
    assert_eq!(item.sodium_mg, None);
}

#[test]
fn test_per_serving_record_without_gram_weight_is_refused() {
    let mut record = granola_record();
    record.serving_size_unit = Some("ml".to_owned());
    let nutrition = import_external_record(&record, &ValidationConfig::default()).unwrap();

    let error =
        FoodLogItem::from_nutrition("Granola", &nutrition, record.serving_weight_grams())
            .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// ============================================================================
// Edits Replace Items Wholesale
// ============================================================================

#[test]
fn test_apply_edit_replaces_every_numeric_field() {
    let item = logged_granola();
    let edit = edit_serving(&item, 2.0, BaseUnit::Serving);
    let edited = item.apply_edit(edit.clone());

    assert_eq!(edited.name, "Granola, oats and honey");
    assert_eq!(edited.quantity, edit.quantity);
    assert_eq!(edited.serving_grams, edit.serving_grams);
    assert_eq!(edited.computed_total_grams(), edit.computed_total_grams);
    assert_eq!(edited.calories, 380.0);
    assert_eq!(edited.fiber_g, Some(6.0));
    assert_eq!(edited.serving_size, "2 servings");
}

#[test]
fn test_item_serializes_and_reads_back_after_grams_mode() {
    let item = logged_granola();
    let in_grams = item.clone().apply_edit(switch_unit(&item, BaseUnit::Grams));

    let stored = serde_json::to_string(&in_grams).unwrap();
    let loaded: FoodLogItem = serde_json::from_str(&stored).unwrap();
    assert_eq!(loaded, in_grams);

    let back = switch_unit(&loaded, BaseUnit::Serving);
    assert_eq!(back.serving_grams, 40.0);
    assert_eq!(back.quantity, 1.0);
}

// ============================================================================
// Daily Totals
// ============================================================================

#[test]
fn test_daily_totals_across_meals() {
    let granola = logged_granola();
    let double = granola
        .clone()
        .apply_edit(edit_serving(&granola, 2.0, BaseUnit::Serving));

    let log = NutritionLog {
        id: "2025-03-14".to_owned(),
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        meals: vec![
            MealEntry {
                meal_type: MealType::Breakfast,
                items: vec![granola],
            },
            MealEntry {
                meal_type: MealType::from_str_lossy("snack"),
                items: vec![double],
            },
        ],
    };

    let totals = log.totals();
    assert_eq!(totals.calories, Some(570.0));
    assert_eq!(totals.protein_g, Some(12.0));
    assert_eq!(totals.fiber_g, Some(9.0));
    assert_eq!(totals.sodium_mg, None);
    assert_eq!(log.meals[1].meal_type, MealType::Snack);
}
