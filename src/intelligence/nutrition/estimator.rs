// ABOUTME: Energy-balance estimation of a single missing calorie or macro field
// ABOUTME: Uses the shared Atwater energy-density table from the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! Energy-balance estimator
//!
//! Two rules exist, and only one can apply to a given set:
//!
//! - calories absent, all three macros present: calories are the rounded
//!   Atwater energy of the macros
//! - calories present, exactly one macro absent: the missing macro gets the
//!   remaining energy divided by its kcal-per-gram factor, rounded to one
//!   decimal and clamped at zero
//!
//! Any other presence pattern is left untouched.

use crate::constants::energy::{EnergyDensity, ENERGY_DENSITY};
use crate::models::{MacroField, NutrientSet};
use crate::rounding::round1;

/// kcal per gram for a macro field; `None` for calories
#[must_use]
pub const fn energy_density(field: MacroField, table: &EnergyDensity) -> Option<f64> {
    match field {
        MacroField::Calories => None,
        MacroField::ProteinG => Some(table.protein_kcal_per_g),
        MacroField::CarbsG => Some(table.carbs_kcal_per_g),
        MacroField::FatG => Some(table.fat_kcal_per_g),
    }
}

/// Derive the single missing required field, if one of the two rules applies
#[must_use]
pub fn estimate_missing_field(nutrients: &NutrientSet) -> Option<(MacroField, f64)> {
    match (
        nutrients.calories,
        nutrients.protein_g,
        nutrients.carbs_g,
        nutrients.fat_g,
    ) {
        (None, Some(protein), Some(carbs), Some(fat)) => Some((
            MacroField::Calories,
            ENERGY_DENSITY.rounded_calories_from_macros(protein, carbs, fat),
        )),
        (Some(calories), _, _, _) => {
            let mut missing = MacroField::MACROS
                .into_iter()
                .filter(|field| nutrients.macro_value(*field).is_none());
            let field = missing.next()?;
            if missing.next().is_some() {
                return None;
            }

            let known_calories = ENERGY_DENSITY.calories_from_macros(
                nutrients.protein_g.unwrap_or(0.0),
                nutrients.carbs_g.unwrap_or(0.0),
                nutrients.fat_g.unwrap_or(0.0),
            );
            let density = energy_density(field, &ENERGY_DENSITY)?;
            let grams = round1((calories - known_calories) / density).max(0.0);
            Some((field, grams))
        }
        _ => None,
    }
}

/// Copy of `nutrients` with the single missing required field filled
///
/// Returns the input unchanged when no rule applies.
#[must_use]
pub fn apply_energy_balance(nutrients: &NutrientSet) -> NutrientSet {
    let mut filled = *nutrients;
    if let Some((field, value)) = estimate_missing_field(nutrients) {
        filled.set_macro(field, value);
    }
    filled
}
