// ABOUTME: Normalizes external nutrient records into a canonical nutrient set and basis
// ABOUTME: Label values win over itemized lists; itemized rows match by ID, legacy ID, then name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! External-record normalizer
//!
//! Itemized nutrient feeds are inconsistent about numeric identifiers
//! across data vintages, so each target field carries an ordered list of
//! extractor strategies. The first strategy that yields a finite amount
//! wins. Name matching is a case-insensitive substring test and always
//! comes last.

use crate::constants::nutrient_ids::{
    CARBOHYDRATE, CARBOHYDRATE_LEGACY, ENERGY_KCAL, ENERGY_KCAL_LEGACY, ENERGY_UNIT_KCAL, FIBER,
    FIBER_LEGACY, PROTEIN, PROTEIN_LEGACY, SODIUM, SODIUM_LEGACY, SUGARS, SUGARS_LEGACY,
    TOTAL_FAT, TOTAL_FAT_LEGACY,
};
use crate::external::fdc::{ExternalNutrientRecord, FoodNutrient, LabelNutrients, LabelValue};
use crate::models::{Basis, NormalizedNutrition, NutrientField, NutrientSet};
use crate::rounding::{finite, round1};

/// One way of locating a field in an itemized nutrient list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorStrategy {
    /// Exact nutrient identifier
    NutrientId(u32),
    /// Case-insensitive substring of the display name, optionally restricted to a unit
    NameContains {
        /// Lowercase name fragment
        fragment: &'static str,
        /// Required unit, checked only when the row states one
        unit: Option<&'static str>,
    },
}

impl ExtractorStrategy {
    fn matches(&self, nutrient: &FoodNutrient) -> bool {
        match self {
            Self::NutrientId(id) => nutrient.id == *id,
            Self::NameContains { fragment, unit } => {
                let name_matches = nutrient
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(fragment));
                let unit_matches = match (unit, nutrient.unit_name.as_deref()) {
                    (Some(required), Some(actual)) => required.eq_ignore_ascii_case(actual.trim()),
                    _ => true,
                };
                name_matches && unit_matches
            }
        }
    }

    /// Amount of the first matching row that carries a finite amount
    #[must_use]
    pub fn extract(&self, nutrients: &[FoodNutrient]) -> Option<f64> {
        nutrients
            .iter()
            .filter(|nutrient| self.matches(nutrient))
            .find_map(|nutrient| finite(nutrient.amount))
    }
}

/// Ordered strategies for one target field
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor {
    /// Field the strategies fill
    pub field: NutrientField,
    /// Strategies in priority order
    pub strategies: &'static [ExtractorStrategy],
}

impl FieldExtractor {
    /// Apply strategies in order and take the first hit
    #[must_use]
    pub fn extract(&self, nutrients: &[FoodNutrient]) -> Option<f64> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.extract(nutrients))
    }
}

const fn name(fragment: &'static str) -> ExtractorStrategy {
    ExtractorStrategy::NameContains {
        fragment,
        unit: None,
    }
}

/// Extraction table for itemized (per-100g) nutrient lists
pub const FIELD_EXTRACTORS: [FieldExtractor; 7] = [
    FieldExtractor {
        field: NutrientField::Calories,
        strategies: &[
            ExtractorStrategy::NutrientId(ENERGY_KCAL),
            ExtractorStrategy::NutrientId(ENERGY_KCAL_LEGACY),
            ExtractorStrategy::NameContains {
                fragment: "energy",
                unit: Some(ENERGY_UNIT_KCAL),
            },
            ExtractorStrategy::NameContains {
                fragment: "calories",
                unit: Some(ENERGY_UNIT_KCAL),
            },
        ],
    },
    FieldExtractor {
        field: NutrientField::ProteinG,
        strategies: &[
            ExtractorStrategy::NutrientId(PROTEIN),
            ExtractorStrategy::NutrientId(PROTEIN_LEGACY),
            name("protein"),
        ],
    },
    FieldExtractor {
        field: NutrientField::CarbsG,
        strategies: &[
            ExtractorStrategy::NutrientId(CARBOHYDRATE),
            ExtractorStrategy::NutrientId(CARBOHYDRATE_LEGACY),
            name("carbohydrate"),
        ],
    },
    FieldExtractor {
        field: NutrientField::FatG,
        strategies: &[
            ExtractorStrategy::NutrientId(TOTAL_FAT),
            ExtractorStrategy::NutrientId(TOTAL_FAT_LEGACY),
            name("total lipid"),
            name("total fat"),
            name("fat"),
        ],
    },
    FieldExtractor {
        field: NutrientField::FiberG,
        strategies: &[
            ExtractorStrategy::NutrientId(FIBER),
            ExtractorStrategy::NutrientId(FIBER_LEGACY),
            name("fiber"),
            name("fibre"),
        ],
    },
    FieldExtractor {
        field: NutrientField::SugarG,
        strategies: &[
            ExtractorStrategy::NutrientId(SUGARS),
            ExtractorStrategy::NutrientId(SUGARS_LEGACY),
            name("sugar"),
        ],
    },
    FieldExtractor {
        field: NutrientField::SodiumMg,
        strategies: &[
            ExtractorStrategy::NutrientId(SODIUM),
            ExtractorStrategy::NutrientId(SODIUM_LEGACY),
            name("sodium"),
        ],
    },
];

/// Round an extracted value to its field's precision; non-finite values become absent
#[must_use]
pub fn round_for_field(field: NutrientField, value: Option<f64>) -> Option<f64> {
    finite(value).map(|v| {
        if field.is_whole_unit() {
            v.round()
        } else {
            round1(v)
        }
    })
}

fn label_value(label: &LabelNutrients, field: NutrientField) -> Option<f64> {
    let entry: Option<&LabelValue> = match field {
        NutrientField::Calories => label.calories.as_ref(),
        NutrientField::ProteinG => label.protein.as_ref(),
        NutrientField::CarbsG => label.carbohydrates.as_ref(),
        NutrientField::FatG => label.fat.as_ref(),
        NutrientField::FiberG => label.fiber.as_ref(),
        NutrientField::SugarG => label.sugars.as_ref(),
        NutrientField::SodiumMg => label.sodium.as_ref(),
    };
    entry.and_then(|v| v.value)
}

/// Extract the seven fields from per-serving label values
#[must_use]
pub fn extract_label(label: &LabelNutrients) -> NutrientSet {
    let mut nutrients = NutrientSet::default();
    for field in NutrientField::ALL {
        nutrients.set_value(field, round_for_field(field, label_value(label, field)));
    }
    nutrients
}

/// Extract the seven fields from an itemized nutrient list
#[must_use]
pub fn extract_itemized(food_nutrients: &[FoodNutrient]) -> NutrientSet {
    let mut nutrients = NutrientSet::default();
    for extractor in &FIELD_EXTRACTORS {
        let value = extractor.extract(food_nutrients);
        nutrients.set_value(extractor.field, round_for_field(extractor.field, value));
    }
    nutrients
}

/// Normalize an external record
///
/// Label values, when present, always win and produce a `per_serving`
/// basis. Otherwise the itemized list is searched and the basis is
/// `per_100g`. Inference markers start cleared.
#[must_use]
pub fn normalize(record: &ExternalNutrientRecord) -> NormalizedNutrition {
    match &record.label_nutrients {
        Some(label) => NormalizedNutrition::new(extract_label(label), Basis::PerServing),
        None => NormalizedNutrition::new(
            extract_itemized(&record.food_nutrients),
            Basis::Per100g,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Completeness;

    #[test]
    fn test_preferred_id_beats_legacy_and_name() {
        let rows = vec![
            FoodNutrient::new(203, "Protein", "g", 9.0),
            FoodNutrient::new(1003, "Protein", "g", 31.02),
        ];
        assert_eq!(extract_itemized(&rows).protein_g, Some(31.0));
    }

    #[test]
    fn test_legacy_id_fallback() {
        let rows = vec![FoodNutrient::new(204, "Lipids", "g", 3.57)];
        assert_eq!(extract_itemized(&rows).fat_g, Some(3.6));
    }

    #[test]
    fn test_name_fallback_is_case_insensitive() {
        let rows = vec![
            FoodNutrient::new(9_001, "Carbohydrate, by difference", "G", 12.34),
            FoodNutrient::new(9_002, "SODIUM, NA", "MG", 73.6),
        ];
        let nutrients = extract_itemized(&rows);
        assert_eq!(nutrients.carbs_g, Some(12.3));
        assert_eq!(nutrients.sodium_mg, Some(74.0));
    }

    #[test]
    fn test_energy_name_match_skips_kilojoules() {
        let rows = vec![
            FoodNutrient::new(9_003, "Energy", "kJ", 690.0),
            FoodNutrient::new(9_004, "Energy (Atwater General Factors)", "KCAL", 165.4),
        ];
        assert_eq!(extract_itemized(&rows).calories, Some(165.0));
    }

    #[test]
    fn test_rows_without_amount_are_skipped() {
        let rows = vec![
            FoodNutrient {
                id: 1008,
                name: Some("Energy".to_owned()),
                unit_name: Some("kcal".to_owned()),
                amount: None,
            },
            FoodNutrient::new(208, "Energy", "kcal", 120.0),
        ];
        assert_eq!(extract_itemized(&rows).calories, Some(120.0));
    }

    #[test]
    fn test_label_shape_wins() {
        let record = ExternalNutrientRecord {
            label_nutrients: Some(LabelNutrients {
                calories: Some(LabelValue::of(190.4)),
                protein: Some(LabelValue::of(4.04)),
                ..LabelNutrients::default()
            }),
            food_nutrients: vec![FoodNutrient::new(1003, "Protein", "g", 10.0)],
            ..ExternalNutrientRecord::default()
        };

        let normalized = normalize(&record);
        assert_eq!(normalized.basis, Basis::PerServing);
        assert_eq!(normalized.nutrients.calories, Some(190.0));
        assert_eq!(normalized.nutrients.protein_g, Some(4.0));
        assert_eq!(normalized.completeness, Completeness::Incomplete);
        assert!(!normalized.used_inference);
    }

    #[test]
    fn test_empty_itemized_list() {
        let normalized = normalize(&ExternalNutrientRecord::default());
        assert_eq!(normalized.basis, Basis::Per100g);
        assert_eq!(normalized.completeness, Completeness::Empty);
        assert!(normalized.estimated_fields.is_empty());
    }

    #[test]
    fn test_non_finite_values_are_absent() {
        assert_eq!(round_for_field(NutrientField::FatG, Some(f64::NAN)), None);
        assert_eq!(round_for_field(NutrientField::Calories, Some(0.0)), Some(0.0));
    }
}
