// ABOUTME: Domain constants for the nutrition engine
// ABOUTME: Energy-density (Atwater) table and external nutrient identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! Constants organized by domain.
//!
//! The energy-density table is the single source of the kcal-per-gram
//! factors. The estimator, the consistency check, and any UI-side calorie
//! preview must all read it from here so their arithmetic stays identical.

/// Energy-balance (Atwater) constants
pub mod energy {
    /// Kilocalories per gram of each macronutrient
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct EnergyDensity {
        /// kcal per gram of protein
        pub protein_kcal_per_g: f64,
        /// kcal per gram of carbohydrate
        pub carbs_kcal_per_g: f64,
        /// kcal per gram of fat
        pub fat_kcal_per_g: f64,
    }

    impl EnergyDensity {
        /// Unrounded energy of a macro breakdown
        #[must_use]
        pub fn calories_from_macros(&self, protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
            self.fat_kcal_per_g.mul_add(
                fat_g,
                self.protein_kcal_per_g
                    .mul_add(protein_g, self.carbs_kcal_per_g * carbs_g),
            )
        }

        /// Energy of a macro breakdown rounded to whole kcal
        #[must_use]
        pub fn rounded_calories_from_macros(&self, protein_g: f64, carbs_g: f64, fat_g: f64) -> f64 {
            self.calories_from_macros(protein_g, carbs_g, fat_g).round()
        }
    }

    /// The fixed energy-density table (not configurable)
    pub const ENERGY_DENSITY: EnergyDensity = EnergyDensity {
        protein_kcal_per_g: CALORIES_PER_GRAM_PROTEIN,
        carbs_kcal_per_g: CALORIES_PER_GRAM_CARB,
        fat_kcal_per_g: CALORIES_PER_GRAM_FAT,
    };

    /// Calories per gram of protein
    pub const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Calories per gram of carbohydrate
    pub const CALORIES_PER_GRAM_CARB: f64 = 4.0;
    /// Calories per gram of fat
    pub const CALORIES_PER_GRAM_FAT: f64 = 9.0;
}

/// `FoodData` Central nutrient identifiers and display-name fragments
///
/// Each field has a current nutrient ID and the legacy SR nutrient number
/// that older data vintages put in the same slot.
pub mod nutrient_ids {
    /// Energy (kcal)
    pub const ENERGY_KCAL: u32 = 1008;
    /// Energy, legacy number
    pub const ENERGY_KCAL_LEGACY: u32 = 208;
    /// Protein
    pub const PROTEIN: u32 = 1003;
    /// Protein, legacy number
    pub const PROTEIN_LEGACY: u32 = 203;
    /// Total lipid (fat)
    pub const TOTAL_FAT: u32 = 1004;
    /// Total lipid, legacy number
    pub const TOTAL_FAT_LEGACY: u32 = 204;
    /// Carbohydrate, by difference
    pub const CARBOHYDRATE: u32 = 1005;
    /// Carbohydrate, legacy number
    pub const CARBOHYDRATE_LEGACY: u32 = 205;
    /// Fiber, total dietary
    pub const FIBER: u32 = 1079;
    /// Fiber, legacy number
    pub const FIBER_LEGACY: u32 = 291;
    /// Sugars, total
    pub const SUGARS: u32 = 2000;
    /// Sugars, legacy number
    pub const SUGARS_LEGACY: u32 = 269;
    /// Sodium, Na
    pub const SODIUM: u32 = 1093;
    /// Sodium, legacy number
    pub const SODIUM_LEGACY: u32 = 307;

    /// Unit accepted for name-matched energy rows (kJ rows are skipped)
    pub const ENERGY_UNIT_KCAL: &str = "kcal";
}

/// Quantity and display precision
pub mod precision {
    /// Decimals kept for gram-denominated nutrients and serving counts
    pub const ONE_DECIMAL: i32 = 1;
    /// Display precision applied to every quantity
    pub const QUANTITY_DISPLAY_DECIMALS: i32 = 2;
    /// Serving weight sentinel used while an item is in grams mode
    pub const GRAMS_MODE_SERVING_GRAMS: f64 = 1.0;
    /// Quantity assigned to per-100g items when they are first logged
    pub const PER_100G_REFERENCE_GRAMS: f64 = 100.0;
}

#[cfg(test)]
mod tests {
    use super::energy::ENERGY_DENSITY;

    #[test]
    fn test_energy_density_matches_atwater_factors() {
        assert_eq!(ENERGY_DENSITY.protein_kcal_per_g, 4.0);
        assert_eq!(ENERGY_DENSITY.carbs_kcal_per_g, 4.0);
        assert_eq!(ENERGY_DENSITY.fat_kcal_per_g, 9.0);
    }

    #[test]
    fn test_calories_from_macros() {
        // 4*20 + 4*30 + 9*10 = 290
        assert_eq!(
            ENERGY_DENSITY.rounded_calories_from_macros(20.0, 30.0, 10.0),
            290.0
        );
        assert!((ENERGY_DENSITY.calories_from_macros(0.1, 0.1, 0.1) - 1.7).abs() < 1e-9);
    }
}
