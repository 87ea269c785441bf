// ABOUTME: Nutrient set, basis, and validation models for imported nutrition data
// ABOUTME: NutrientSet, MacroField, NutrientField, NormalizedNutrition, and ValidationResult definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four required energy/macro fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MacroField {
    /// Energy in kcal
    #[serde(rename = "calories")]
    Calories,
    /// Protein in grams
    #[serde(rename = "protein_g")]
    ProteinG,
    /// Carbohydrates in grams
    #[serde(rename = "carbs_g")]
    CarbsG,
    /// Fat in grams
    #[serde(rename = "fat_g")]
    FatG,
}

impl MacroField {
    /// All four fields in canonical order
    pub const ALL: [Self; 4] = [Self::Calories, Self::ProteinG, Self::CarbsG, Self::FatG];

    /// The three gram-denominated macros
    pub const MACROS: [Self; 3] = [Self::ProteinG, Self::CarbsG, Self::FatG];

    /// Field name as used in serialized records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::ProteinG => "protein_g",
            Self::CarbsG => "carbs_g",
            Self::FatG => "fat_g",
        }
    }
}

impl fmt::Display for MacroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every nutrient the engine extracts from external records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientField {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    ProteinG,
    /// Carbohydrates in grams
    CarbsG,
    /// Fat in grams
    FatG,
    /// Dietary fiber in grams
    FiberG,
    /// Total sugars in grams
    SugarG,
    /// Sodium in milligrams
    SodiumMg,
}

impl NutrientField {
    /// All seven fields in extraction order
    pub const ALL: [Self; 7] = [
        Self::Calories,
        Self::ProteinG,
        Self::CarbsG,
        Self::FatG,
        Self::FiberG,
        Self::SugarG,
        Self::SodiumMg,
    ];

    /// Whether the field is reported in whole units (kcal, mg)
    #[must_use]
    pub const fn is_whole_unit(&self) -> bool {
        matches!(self, Self::Calories | Self::SodiumMg)
    }
}

/// A partial set of nutrient values
///
/// Absence is distinct from zero: `Some(0.0)` is a measured value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSet {
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Protein in grams
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    pub carbs_g: Option<f64>,
    /// Fat in grams
    pub fat_g: Option<f64>,
    /// Dietary fiber in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Total sugars in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Sodium in milligrams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
}

impl NutrientSet {
    /// Value of one of the four required fields
    #[must_use]
    pub const fn macro_value(&self, field: MacroField) -> Option<f64> {
        match field {
            MacroField::Calories => self.calories,
            MacroField::ProteinG => self.protein_g,
            MacroField::CarbsG => self.carbs_g,
            MacroField::FatG => self.fat_g,
        }
    }

    /// Set one of the four required fields
    pub fn set_macro(&mut self, field: MacroField, value: f64) {
        let slot = match field {
            MacroField::Calories => &mut self.calories,
            MacroField::ProteinG => &mut self.protein_g,
            MacroField::CarbsG => &mut self.carbs_g,
            MacroField::FatG => &mut self.fat_g,
        };
        *slot = Some(value);
    }

    /// Value of any extracted field
    #[must_use]
    pub const fn value(&self, field: NutrientField) -> Option<f64> {
        match field {
            NutrientField::Calories => self.calories,
            NutrientField::ProteinG => self.protein_g,
            NutrientField::CarbsG => self.carbs_g,
            NutrientField::FatG => self.fat_g,
            NutrientField::FiberG => self.fiber_g,
            NutrientField::SugarG => self.sugar_g,
            NutrientField::SodiumMg => self.sodium_mg,
        }
    }

    /// Set or clear any extracted field
    pub fn set_value(&mut self, field: NutrientField, value: Option<f64>) {
        match field {
            NutrientField::Calories => self.calories = value,
            NutrientField::ProteinG => self.protein_g = value,
            NutrientField::CarbsG => self.carbs_g = value,
            NutrientField::FatG => self.fat_g = value,
            NutrientField::FiberG => self.fiber_g = value,
            NutrientField::SugarG => self.sugar_g = value,
            NutrientField::SodiumMg => self.sodium_mg = value,
        }
    }

    /// Number of the four required fields that are present
    #[must_use]
    pub fn present_macro_count(&self) -> usize {
        MacroField::ALL
            .iter()
            .filter(|field| self.macro_value(**field).is_some())
            .count()
    }

    /// The four required values, when all are present
    #[must_use]
    pub const fn complete_macros(&self) -> Option<(f64, f64, f64, f64)> {
        match (self.calories, self.protein_g, self.carbs_g, self.fat_g) {
            (Some(calories), Some(protein), Some(carbs), Some(fat)) => {
                Some((calories, protein, carbs, fat))
            }
            _ => None,
        }
    }
}

/// Whether a nutrient set describes one labeled serving or 100 grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    /// Values describe one labeled serving
    PerServing,
    /// Values describe a 100 g reference quantity
    #[serde(rename = "per_100g")]
    Per100g,
}

/// Presence summary of the four required fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Completeness {
    /// All four present
    Complete,
    /// Some but not all present
    Incomplete,
    /// None present
    Empty,
}

impl Completeness {
    /// Classify a nutrient set by its required fields
    #[must_use]
    pub fn of(nutrients: &NutrientSet) -> Self {
        match nutrients.present_macro_count() {
            0 => Self::Empty,
            4 => Self::Complete,
            _ => Self::Incomplete,
        }
    }
}

/// Canonical post-extraction nutrition record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedNutrition {
    /// Extracted values
    #[serde(flatten)]
    pub nutrients: NutrientSet,
    /// Presence summary of the required fields
    pub completeness: Completeness,
    /// What the values describe
    pub basis: Basis,
    /// Whether any required field was estimated
    pub used_inference: bool,
    /// Fields filled by energy-balance estimation
    pub estimated_fields: Vec<MacroField>,
}

impl NormalizedNutrition {
    /// Wrap freshly extracted values; inference markers start cleared
    #[must_use]
    pub fn new(nutrients: NutrientSet, basis: Basis) -> Self {
        Self {
            completeness: Completeness::of(&nutrients),
            nutrients,
            basis,
            used_inference: false,
            estimated_fields: Vec::new(),
        }
    }
}

/// Next step for a partially populated record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Complete, import as-is
    Import,
    /// Exactly one field can be derived from energy balance
    Estimate,
    /// Too many gaps; the user must enter values
    Manual,
    /// No usable data
    Skip,
}

/// Presence classification of the four required fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Calories present
    pub has_calories: bool,
    /// Protein present
    pub has_protein: bool,
    /// Carbohydrates present
    pub has_carbs: bool,
    /// Fat present
    pub has_fat: bool,
    /// Absent required fields, in canonical order
    pub missing_macros: Vec<MacroField>,
    /// Whether a single missing field can be estimated
    pub can_estimate: bool,
    /// What the caller should do with the record
    pub recommended_action: RecommendedAction,
}

impl ValidationResult {
    /// Whether the record can be imported (directly or after estimation)
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(
            self.recommended_action,
            RecommendedAction::Import | RecommendedAction::Estimate
        )
    }
}
