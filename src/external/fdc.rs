// ABOUTME: FoodData Central record shapes consumed by the nutrition normalizer
// ABOUTME: Label (per-serving) nutrients and itemized (per-100g) nutrient lists in full and abridged forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! USDA `FoodData` Central record shapes
//!
//! The lookup client that fetches these records lives outside this crate.
//! This module only describes the already-fetched JSON so the normalizer
//! can consume it. Two nutrient shapes appear in practice:
//!
//! - `labelNutrients`: per-serving values printed on a branded label
//!   (`{"calories": {"value": 200}, "protein": {"value": 5}, ...}`)
//! - `foodNutrients`: an itemized list, nominally per 100 g, either in the
//!   full form (`{"nutrient": {"id": 1003, "name": "Protein", "unitName": "g"}, "amount": 31.0}`)
//!   or the abridged form (`{"nutrientId": 1003, "nutrientName": "Protein", "unitName": "G", "value": 31.0}`)

use serde::{Deserialize, Serialize};

/// Units accepted as grams for `servingSizeUnit`
const GRAM_UNITS: [&str; 4] = ["g", "grm", "gram", "grams"];

/// One value on a nutrition label
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelValue {
    /// Amount per serving
    #[serde(default)]
    pub value: Option<f64>,
}

impl LabelValue {
    /// Label entry with a value
    #[must_use]
    pub const fn of(value: f64) -> Self {
        Self { value: Some(value) }
    }
}

/// Per-serving values printed on a branded food label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelNutrients {
    /// Energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<LabelValue>,
    /// Protein (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<LabelValue>,
    /// Total fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<LabelValue>,
    /// Total carbohydrates (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<LabelValue>,
    /// Dietary fiber (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<LabelValue>,
    /// Total sugars (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars: Option<LabelValue>,
    /// Sodium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<LabelValue>,
}

/// One itemized nutrient, nominally per 100 g of food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FoodNutrientPayload")]
pub struct FoodNutrient {
    /// `FoodData` Central nutrient ID
    #[serde(rename = "nutrientId")]
    pub id: u32,
    /// Nutrient display name (e.g. "Protein", "Energy")
    #[serde(rename = "nutrientName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit name (e.g. "g", "kcal", "mg")
    #[serde(rename = "unitName", skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Amount
    #[serde(rename = "value", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl FoodNutrient {
    /// Build an itemized nutrient row
    #[must_use]
    pub fn new(id: u32, name: &str, unit_name: &str, amount: f64) -> Self {
        Self {
            id,
            name: Some(name.to_owned()),
            unit_name: Some(unit_name.to_owned()),
            amount: Some(amount),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NutrientInfo {
    id: u32,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "unitName", default)]
    unit_name: Option<String>,
}

/// Wire forms of an itemized nutrient
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FoodNutrientPayload {
    Full {
        nutrient: NutrientInfo,
        #[serde(default)]
        amount: Option<f64>,
    },
    Abridged {
        #[serde(rename = "nutrientId")]
        nutrient_id: u32,
        #[serde(rename = "nutrientName", default)]
        nutrient_name: Option<String>,
        #[serde(rename = "unitName", default)]
        unit_name: Option<String>,
        #[serde(default, alias = "amount")]
        value: Option<f64>,
    },
}

impl From<FoodNutrientPayload> for FoodNutrient {
    fn from(payload: FoodNutrientPayload) -> Self {
        match payload {
            FoodNutrientPayload::Full { nutrient, amount } => Self {
                id: nutrient.id,
                name: nutrient.name,
                unit_name: nutrient.unit_name,
                amount,
            },
            FoodNutrientPayload::Abridged {
                nutrient_id,
                nutrient_name,
                unit_name,
                value,
            } => Self {
                id: nutrient_id,
                name: nutrient_name,
                unit_name,
                amount: value,
            },
        }
    }
}

/// An already-fetched external nutrient record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalNutrientRecord {
    /// `FoodData` Central ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<u64>,
    /// Food description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Labeled serving size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    /// Unit of `serving_size` (e.g. "g", "ml")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size_unit: Option<String>,
    /// Per-serving label values (branded foods)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_nutrients: Option<LabelNutrients>,
    /// Itemized per-100g nutrients
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub food_nutrients: Vec<FoodNutrient>,
}

impl ExternalNutrientRecord {
    /// Labeled serving size in grams, when the label states one in grams
    #[must_use]
    pub fn serving_weight_grams(&self) -> Option<f64> {
        let size = self.serving_size.filter(|s| s.is_finite() && *s > 0.0)?;
        let unit = self.serving_size_unit.as_deref()?.trim();
        GRAM_UNITS
            .iter()
            .any(|g| g.eq_ignore_ascii_case(unit))
            .then_some(size)
    }

    /// Identifier used in logs and error context
    #[must_use]
    pub fn resource_id(&self) -> String {
        self.fdc_id.map_or_else(
            || {
                self.description
                    .clone()
                    .unwrap_or_else(|| "unidentified record".to_owned())
            },
            |id| format!("fdc:{id}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_nutrient_form() {
        let record: ExternalNutrientRecord = serde_json::from_value(json!({
            "fdcId": 171_477,
            "description": "Chicken, breast, meat only, cooked, roasted",
            "foodNutrients": [
                { "type": "FoodNutrient", "nutrient": { "id": 1003, "number": "203", "name": "Protein", "unitName": "g" }, "amount": 31.02 },
                { "nutrient": { "id": 1008, "name": "Energy", "unitName": "kcal" } }
            ]
        }))
        .unwrap();

        assert_eq!(record.fdc_id, Some(171_477));
        assert_eq!(record.food_nutrients.len(), 2);
        assert_eq!(record.food_nutrients[0].id, 1003);
        assert_eq!(record.food_nutrients[0].amount, Some(31.02));
        assert_eq!(record.food_nutrients[1].amount, None);
        assert!(record.label_nutrients.is_none());
    }

    #[test]
    fn test_deserialize_abridged_nutrient_form() {
        let record: ExternalNutrientRecord = serde_json::from_value(json!({
            "foodNutrients": [
                { "nutrientId": 1004, "nutrientName": "Total lipid (fat)", "unitName": "G", "value": 3.57 },
                { "nutrientId": 1005, "amount": 0.0 }
            ]
        }))
        .unwrap();

        assert_eq!(record.food_nutrients[0].name.as_deref(), Some("Total lipid (fat)"));
        assert_eq!(record.food_nutrients[0].amount, Some(3.57));
        assert_eq!(record.food_nutrients[1].amount, Some(0.0));
        assert_eq!(record.food_nutrients[1].name, None);
    }

    #[test]
    fn test_serialized_nutrient_reads_back() {
        let original = FoodNutrient::new(1093, "Sodium, Na", "mg", 74.0);
        let text = serde_json::to_string(&original).unwrap();
        let parsed: FoodNutrient = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_deserialize_label_nutrients() {
        let record: ExternalNutrientRecord = serde_json::from_value(json!({
            "servingSize": 40,
            "servingSizeUnit": "GRM",
            "labelNutrients": {
                "calories": { "value": 190 },
                "protein": { "value": 4 },
                "fat": {}
            }
        }))
        .unwrap();

        let label = record.label_nutrients.as_ref().unwrap();
        assert_eq!(label.calories, Some(LabelValue::of(190.0)));
        assert_eq!(label.fat, Some(LabelValue::default()));
        assert_eq!(label.sodium, None);
        assert_eq!(record.serving_weight_grams(), Some(40.0));
    }

    #[test]
    fn test_serving_weight_requires_gram_unit() {
        let record = ExternalNutrientRecord {
            serving_size: Some(240.0),
            serving_size_unit: Some("ml".to_owned()),
            ..ExternalNutrientRecord::default()
        };
        assert_eq!(record.serving_weight_grams(), None);

        let zero = ExternalNutrientRecord {
            serving_size: Some(0.0),
            serving_size_unit: Some("g".to_owned()),
            ..ExternalNutrientRecord::default()
        };
        assert_eq!(zero.serving_weight_grams(), None);
    }

    #[test]
    fn test_resource_id() {
        let record = ExternalNutrientRecord {
            fdc_id: Some(42),
            ..ExternalNutrientRecord::default()
        };
        assert_eq!(record.resource_id(), "fdc:42");
        assert_eq!(ExternalNutrientRecord::default().resource_id(), "unidentified record");
    }
}
