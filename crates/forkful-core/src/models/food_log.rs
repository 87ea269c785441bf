// ABOUTME: Food log models for logged food occurrences and their serving/gram edits
// ABOUTME: FoodLogItem, ServingEditResult, BaseUnit, MealEntry, MealType, and NutritionLog definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::nutrition::{Basis, NormalizedNutrition, NutrientField, NutrientSet};
use crate::constants::precision::{GRAMS_MODE_SERVING_GRAMS, PER_100G_REFERENCE_GRAMS};
use crate::errors::{AppError, AppResult};
use crate::rounding::{display_quantity, round1};

/// Unit a logged quantity is expressed in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BaseUnit {
    /// Quantity counts labeled servings
    Serving,
    /// Quantity is a weight in grams
    Grams,
}

impl BaseUnit {
    /// Parse a unit from user input
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` for anything other than a serving or gram spelling
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "serving" | "servings" | "srv" => Ok(Self::Serving),
            "g" | "gram" | "grams" => Ok(Self::Grams),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit '{other}' (expected serving or grams)"
            ))),
        }
    }
}

/// Human-readable quantity label, a pure function of quantity and unit
///
/// Grams render as `"<int>g"`; servings as `"<n> serving"`, pluralized
/// when `n != 1`.
#[must_use]
pub fn serving_label(quantity: f64, unit: BaseUnit) -> String {
    match unit {
        BaseUnit::Grams => format!("{}g", quantity.round() as i64),
        BaseUnit::Serving => {
            let shown = display_quantity(quantity);
            let suffix = if shown == 1.0 { "" } else { "s" };
            format!("{shown} serving{suffix}")
        }
    }
}

/// Output of a quantity/unit edit
///
/// Authoritative replacement for every numeric and display field of a
/// [`FoodLogItem`]; adopt it whole via [`FoodLogItem::apply_edit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingEditResult {
    /// New quantity in `base_unit`
    pub quantity: f64,
    /// New unit
    pub base_unit: BaseUnit,
    /// Grams per unit of quantity (1 in grams mode)
    pub serving_grams: f64,
    /// The food's per-serving weight to restore when leaving grams mode
    pub reference_serving_grams: f64,
    /// `quantity * serving_grams`
    pub computed_total_grams: f64,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Dietary fiber in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Total sugars in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Sodium in milligrams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
    /// Display label for the quantity
    pub serving_size: String,
}

/// A logged food occurrence
///
/// Items are never mutated field by field; edits produce a
/// [`ServingEditResult`] that replaces the numeric state wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogItem {
    /// Food name
    pub name: String,
    /// Quantity in `base_unit`
    pub quantity: f64,
    /// Unit of `quantity`
    pub base_unit: BaseUnit,
    /// Grams per unit of quantity: the serving weight in serving mode, 1 in grams mode
    pub serving_grams: f64,
    /// The food's per-serving weight, restored when the item leaves grams mode
    pub reference_serving_grams: f64,
    /// Energy in kcal for the logged quantity
    pub calories: f64,
    /// Protein in grams for the logged quantity
    pub protein_g: f64,
    /// Carbohydrates in grams for the logged quantity
    pub carbs_g: f64,
    /// Fat in grams for the logged quantity
    pub fat_g: f64,
    /// Dietary fiber in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Total sugars in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Sodium in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
    /// Display label for the quantity
    pub serving_size: String,
}

impl FoodLogItem {
    /// Create an item from an accepted nutrition record
    ///
    /// Per-serving records are logged as one serving of `serving_grams`.
    /// Per-100g records are logged as 100 grams; `serving_grams` (or 100 g
    /// when unknown) becomes the reference serving weight.
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if any required field is absent or
    /// a per-serving record has no serving weight, and
    /// `AppError::out_of_range` if the serving weight is not a positive
    /// finite number
    pub fn from_nutrition(
        name: impl Into<String>,
        nutrition: &NormalizedNutrition,
        serving_grams: Option<f64>,
    ) -> AppResult<Self> {
        let (calories, protein_g, carbs_g, fat_g) =
            nutrition.nutrients.complete_macros().ok_or_else(|| {
                AppError::invalid_input("Nutrition must have calories, protein, carbs and fat")
            })?;

        if let Some(grams) = serving_grams {
            if !grams.is_finite() || grams <= 0.0 {
                return Err(AppError::out_of_range(format!(
                    "Serving weight must be a positive number of grams, got {grams}"
                )));
            }
        }

        let (quantity, base_unit, unit_grams, reference) = match nutrition.basis {
            Basis::PerServing => {
                let grams = serving_grams.ok_or_else(|| {
                    AppError::invalid_input("Per-serving nutrition requires a serving weight")
                })?;
                (1.0, BaseUnit::Serving, grams, grams)
            }
            Basis::Per100g => (
                PER_100G_REFERENCE_GRAMS,
                BaseUnit::Grams,
                GRAMS_MODE_SERVING_GRAMS,
                serving_grams.unwrap_or(PER_100G_REFERENCE_GRAMS),
            ),
        };

        Ok(Self {
            name: name.into(),
            quantity,
            base_unit,
            serving_grams: unit_grams,
            reference_serving_grams: reference,
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g: nutrition.nutrients.fiber_g,
            sugar_g: nutrition.nutrients.sugar_g,
            sodium_mg: nutrition.nutrients.sodium_mg,
            serving_size: serving_label(quantity, base_unit),
        })
    }

    /// Total grams represented by this item (`quantity * serving_grams`)
    #[must_use]
    pub fn computed_total_grams(&self) -> f64 {
        self.quantity * self.serving_grams
    }

    /// Replace every numeric and display field with an edit result
    #[must_use]
    pub fn apply_edit(self, edit: ServingEditResult) -> Self {
        Self {
            name: self.name,
            quantity: edit.quantity,
            base_unit: edit.base_unit,
            serving_grams: edit.serving_grams,
            reference_serving_grams: edit.reference_serving_grams,
            calories: edit.calories,
            protein_g: edit.protein_g,
            carbs_g: edit.carbs_g,
            fat_g: edit.fat_g,
            fiber_g: edit.fiber_g,
            sugar_g: edit.sugar_g,
            sodium_mg: edit.sodium_mg,
            serving_size: edit.serving_size,
        }
    }

    /// The item's nutrients as a set
    #[must_use]
    pub const fn nutrients(&self) -> NutrientSet {
        NutrientSet {
            calories: Some(self.calories),
            protein_g: Some(self.protein_g),
            carbs_g: Some(self.carbs_g),
            fat_g: Some(self.fat_g),
            fiber_g: self.fiber_g,
            sugar_g: self.sugar_g,
            sodium_mg: self.sodium_mg,
        }
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Foods logged for one meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Meal type
    pub meal_type: MealType,
    /// Logged foods
    pub items: Vec<FoodLogItem>,
}

impl MealEntry {
    /// Summed nutrients of this meal
    #[must_use]
    pub fn totals(&self) -> NutrientSet {
        sum_nutrients(self.items.iter())
    }
}

/// One day of logged food
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Unique identifier assigned by the storage layer
    pub id: String,
    /// Day the log covers
    pub date: NaiveDate,
    /// Meals logged on that day
    pub meals: Vec<MealEntry>,
}

impl NutritionLog {
    /// Summed nutrients over every meal
    ///
    /// Required fields always sum (to zero for an empty log). Optional
    /// fields stay absent unless at least one item reports them.
    #[must_use]
    pub fn totals(&self) -> NutrientSet {
        sum_nutrients(self.meals.iter().flat_map(|meal| meal.items.iter()))
    }
}

fn sum_nutrients<'a>(items: impl Iterator<Item = &'a FoodLogItem>) -> NutrientSet {
    let mut totals = NutrientSet {
        calories: Some(0.0),
        protein_g: Some(0.0),
        carbs_g: Some(0.0),
        fat_g: Some(0.0),
        ..NutrientSet::default()
    };
    for item in items {
        let nutrients = item.nutrients();
        for field in NutrientField::ALL {
            let sum = match (totals.value(field), nutrients.value(field)) {
                (Some(total), Some(value)) => Some(total + value),
                (total, None) => total,
                (None, value) => value,
            };
            totals.set_value(field, sum);
        }
    }

    for field in NutrientField::ALL {
        let rounded = totals.value(field).map(|v| {
            if field.is_whole_unit() {
                v.round()
            } else {
                round1(v)
            }
        });
        totals.set_value(field, rounded);
    }
    totals
}
