// ABOUTME: Core data models for the nutrition engine
// ABOUTME: Re-exports nutrient-set, normalized-nutrition, and food-log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

/// Nutrient sets, basis tags, and validation classifications
pub mod nutrition;

/// Logged food items, edit results, and daily logs
pub mod food_log;

pub use food_log::{
    serving_label, BaseUnit, FoodLogItem, MealEntry, MealType, NutritionLog, ServingEditResult,
};
pub use nutrition::{
    Basis, Completeness, MacroField, NormalizedNutrition, NutrientField, NutrientSet,
    RecommendedAction, ValidationResult,
};
