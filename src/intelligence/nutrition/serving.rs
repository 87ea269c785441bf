// ABOUTME: Serving/gram quantity conversion for logged food items
// ABOUTME: Rescales calories and macros while preserving the per-serving gram weight across toggles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! Serving/gram conversion engine
//!
//! Two transitions exist:
//!
//! - **to grams**: the serving weight becomes 1 and the quantity is the
//!   gram weight. Nutrients are per-gram rates of the current item times
//!   the new weight, so a chain of small gram edits does not compound
//!   rounding.
//! - **to servings**: the serving weight is the food's reference weight,
//!   never the grams-mode sentinel. Nutrients are the current item's values
//!   scaled by the ratio of new to old total grams.
//!
//! Conversions never fail. Zero, negative and non-finite quantities yield
//! a zero quantity and zero nutrients; callers validate user input.
//! Rounding happens once, on the returned result: nutrients are scaled
//! from the requested quantity, not from its rounded display value, so
//! re-applying an item's own quantity leaves its nutrients unchanged.

use crate::constants::precision::{GRAMS_MODE_SERVING_GRAMS, PER_100G_REFERENCE_GRAMS};
use crate::models::{serving_label, BaseUnit, FoodLogItem, ServingEditResult};
use crate::rounding::{display_quantity, round1};

/// Absolute nutrient values, scaled as a unit
#[derive(Debug, Clone, Copy)]
struct NutrientAmounts {
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: Option<f64>,
    sugar_g: Option<f64>,
    sodium_mg: Option<f64>,
}

impl NutrientAmounts {
    const fn of(item: &FoodLogItem) -> Self {
        Self {
            calories: item.calories,
            protein_g: item.protein_g,
            carbs_g: item.carbs_g,
            fat_g: item.fat_g,
            fiber_g: item.fiber_g,
            sugar_g: item.sugar_g,
            sodium_mg: item.sodium_mg,
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g.map(|v| v * factor),
            sugar_g: self.sugar_g.map(|v| v * factor),
            sodium_mg: self.sodium_mg.map(|v| v * factor),
        }
    }

    /// Whole kcal and mg; one decimal for grams
    fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein_g: round1(self.protein_g),
            carbs_g: round1(self.carbs_g),
            fat_g: round1(self.fat_g),
            fiber_g: self.fiber_g.map(round1),
            sugar_g: self.sugar_g.map(round1),
            sodium_mg: self.sodium_mg.map(f64::round),
        }
    }
}

/// Usable total weight of an item, or `None` when it cannot serve as a divisor
fn positive_total_grams(item: &FoodLogItem) -> Option<f64> {
    Some(item.computed_total_grams()).filter(|grams| grams.is_finite() && *grams > 0.0)
}

/// The food's per-serving gram weight
///
/// A serving-mode item's own serving weight wins. In grams mode that field
/// holds the sentinel 1, so the stored reference weight is used, then the
/// 100 g reference quantity.
#[must_use]
pub fn reference_serving_weight(item: &FoodLogItem) -> f64 {
    let usable = |grams: f64| grams.is_finite() && grams > 0.0;
    if item.base_unit == BaseUnit::Serving && usable(item.serving_grams) {
        item.serving_grams
    } else if usable(item.reference_serving_grams) {
        item.reference_serving_grams
    } else {
        PER_100G_REFERENCE_GRAMS
    }
}

fn sanitize_quantity(quantity: f64) -> f64 {
    if quantity.is_finite() {
        quantity.max(0.0)
    } else {
        0.0
    }
}

/// Compute the replacement state for a quantity/unit edit
///
/// `edited_quantity` is in `edited_unit`: grams for [`BaseUnit::Grams`],
/// servings for [`BaseUnit::Serving`]. The result replaces every numeric
/// and display field of the item and satisfies
/// `computed_total_grams == quantity * serving_grams`.
#[must_use]
pub fn edit_serving(
    item: &FoodLogItem,
    edited_quantity: f64,
    edited_unit: BaseUnit,
) -> ServingEditResult {
    let requested = sanitize_quantity(edited_quantity);
    let reference = reference_serving_weight(item);
    let current = NutrientAmounts::of(item);

    // Nutrients scale with the requested amount; only the outputs are rounded.
    let (quantity, serving_grams, amounts) = match edited_unit {
        BaseUnit::Grams => {
            let per_gram = positive_total_grams(item)
                .map_or_else(|| current.scaled(0.0), |total| current.scaled(1.0 / total));
            (
                display_quantity(requested.round()),
                GRAMS_MODE_SERVING_GRAMS,
                per_gram.scaled(requested),
            )
        }
        BaseUnit::Serving => {
            let new_total = requested * reference;
            let ratio = positive_total_grams(item).map_or(0.0, |old_total| new_total / old_total);
            (
                display_quantity(round1(requested)),
                reference,
                current.scaled(ratio),
            )
        }
    };

    let amounts = amounts.rounded();
    ServingEditResult {
        quantity,
        base_unit: edited_unit,
        serving_grams,
        reference_serving_grams: reference,
        computed_total_grams: quantity * serving_grams,
        calories: amounts.calories,
        protein_g: amounts.protein_g,
        carbs_g: amounts.carbs_g,
        fat_g: amounts.fat_g,
        fiber_g: amounts.fiber_g,
        sugar_g: amounts.sugar_g,
        sodium_mg: amounts.sodium_mg,
        serving_size: serving_label(quantity, edited_unit),
    }
}

/// Show the same amount of food in another unit
///
/// Grams keep the item's total weight; servings divide it by the
/// reference serving weight. Switching to the current unit re-applies the
/// current quantity.
#[must_use]
pub fn switch_unit(item: &FoodLogItem, target_unit: BaseUnit) -> ServingEditResult {
    let quantity = if target_unit == item.base_unit {
        item.quantity
    } else {
        match target_unit {
            BaseUnit::Grams => item.computed_total_grams(),
            BaseUnit::Serving => item.computed_total_grams() / reference_serving_weight(item),
        }
    };
    edit_serving(item, quantity, target_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granola() -> FoodLogItem {
        FoodLogItem {
            name: "Granola".to_owned(),
            quantity: 1.5,
            base_unit: BaseUnit::Serving,
            serving_grams: 40.0,
            reference_serving_grams: 40.0,
            calories: 285.0,
            protein_g: 7.5,
            carbs_g: 45.0,
            fat_g: 9.0,
            fiber_g: Some(4.5),
            sugar_g: None,
            sodium_mg: Some(120.0),
            serving_size: serving_label(1.5, BaseUnit::Serving),
        }
    }

    #[test]
    fn test_serving_to_grams() {
        let edit = switch_unit(&granola(), BaseUnit::Grams);

        assert_eq!(edit.quantity, 60.0);
        assert_eq!(edit.serving_grams, 1.0);
        assert_eq!(edit.computed_total_grams, 60.0);
        assert_eq!(edit.calories, 285.0);
        assert_eq!(edit.fiber_g, Some(4.5));
        assert_eq!(edit.sugar_g, None);
        assert_eq!(edit.serving_size, "60g");
    }

    #[test]
    fn test_grams_back_to_serving_restores_weight() {
        let in_grams = granola().apply_edit(switch_unit(&granola(), BaseUnit::Grams));
        let back = switch_unit(&in_grams, BaseUnit::Serving);

        assert_eq!(back.serving_grams, 40.0);
        assert_eq!(back.quantity, 1.5);
        assert_eq!(back.calories, 285.0);
        assert_eq!(back.serving_size, "1.5 servings");
    }

    #[test]
    fn test_gram_edit_uses_per_gram_rates() {
        let in_grams = granola().apply_edit(switch_unit(&granola(), BaseUnit::Grams));
        let edit = edit_serving(&in_grams, 100.0, BaseUnit::Grams);

        // 285 kcal / 60 g * 100 g
        assert_eq!(edit.calories, 475.0);
        assert_eq!(edit.sodium_mg, Some(200.0));
        assert_eq!(edit.reference_serving_grams, 40.0);
    }

    #[test]
    fn test_serving_edit_rounds_quantity() {
        let edit = edit_serving(&granola(), 2.04, BaseUnit::Serving);
        assert_eq!(edit.quantity, 2.0);
        assert_eq!(edit.computed_total_grams, 80.0);
        // 285 kcal * 81.6 g / 60 g, scaled before the quantity is rounded
        assert_eq!(edit.calories, 388.0);
        assert_eq!(edit.serving_size, "2 servings");
    }

    #[test]
    fn test_reapplying_fine_grained_quantity_keeps_nutrients() {
        let mut manual = granola();
        manual.quantity = 1.25;
        manual.calories = 200.0;
        manual.protein_g = 5.0;
        manual.sodium_mg = Some(95.0);

        let servings = edit_serving(&manual, 1.25, BaseUnit::Serving);
        assert_eq!(servings.calories, 200.0);
        assert_eq!(servings.protein_g, 5.0);
        assert_eq!(servings.sodium_mg, Some(95.0));
        assert_eq!(servings.quantity, 1.3);

        let mut weighed = granola();
        weighed.base_unit = BaseUnit::Grams;
        weighed.quantity = 84.6;
        weighed.serving_grams = 1.0;
        weighed.calories = 500.0;
        weighed.fat_g = 12.3;

        let grams = edit_serving(&weighed, 84.6, BaseUnit::Grams);
        assert_eq!(grams.calories, 500.0);
        assert_eq!(grams.fat_g, 12.3);
        assert_eq!(grams.quantity, 85.0);
        assert_eq!(grams.computed_total_grams, 85.0);
    }

    #[test]
    fn test_serving_mode_weight_wins_over_stale_reference() {
        let mut item = granola();
        item.reference_serving_grams = 30.0;
        assert_eq!(reference_serving_weight(&item), 40.0);

        let edit = edit_serving(&item, 2.0, BaseUnit::Serving);
        assert_eq!(edit.serving_grams, 40.0);
        assert_eq!(edit.computed_total_grams, 80.0);
        assert_eq!(edit.reference_serving_grams, 40.0);

        // The weight restored after grams mode is the one the item was using
        let in_grams = item.clone().apply_edit(switch_unit(&item, BaseUnit::Grams));
        let back = switch_unit(&in_grams, BaseUnit::Serving);
        assert_eq!(back.serving_grams, 40.0);
        assert_eq!(back.quantity, 1.5);
    }

    #[test]
    fn test_degenerate_quantities_yield_zero() {
        for quantity in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let edit = edit_serving(&granola(), quantity, BaseUnit::Serving);
            assert_eq!(edit.quantity, 0.0);
            assert_eq!(edit.calories, 0.0);
            assert_eq!(edit.computed_total_grams, 0.0);
            assert_eq!(edit.serving_grams, 40.0);
        }
    }

    #[test]
    fn test_zero_weight_item_scales_to_zero() {
        let empty = granola().apply_edit(edit_serving(&granola(), 0.0, BaseUnit::Serving));
        let grams = edit_serving(&empty, 50.0, BaseUnit::Grams);
        assert_eq!(grams.calories, 0.0);
        assert_eq!(grams.protein_g, 0.0);

        let servings = edit_serving(&empty, 2.0, BaseUnit::Serving);
        assert_eq!(servings.calories, 0.0);
        assert_eq!(servings.computed_total_grams, 80.0);
    }

    #[test]
    fn test_missing_reference_weight_falls_back() {
        let mut item = granola();
        item.reference_serving_grams = 0.0;
        assert_eq!(reference_serving_weight(&item), 40.0);

        item.base_unit = BaseUnit::Grams;
        item.serving_grams = 1.0;
        assert_eq!(reference_serving_weight(&item), 100.0);
    }
}
