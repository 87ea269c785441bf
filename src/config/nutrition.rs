// ABOUTME: Validation tolerance settings for imported nutrition records
// ABOUTME: Floor and ratio of the calorie/macro energy-balance consistency check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! Nutrition validation configuration
//!
//! The consistency check accepts a record when its stated calories are
//! within `max(floor, round(ratio * calories))` of the Atwater energy of its
//! macros. Defaults are 20 kcal and 10%; very-low-calorie foods get a
//! proportionally wide margin from the floor.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default minimum tolerance in kcal
pub const DEFAULT_TOLERANCE_FLOOR_KCAL: f64 = 20.0;

/// Default tolerance as a fraction of stated calories
pub const DEFAULT_TOLERANCE_RATIO: f64 = 0.10;

/// Energy-balance consistency check settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum allowed difference in kcal
    pub tolerance_floor_kcal: f64,
    /// Allowed difference as a fraction of stated calories
    pub tolerance_ratio: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            tolerance_floor_kcal: DEFAULT_TOLERANCE_FLOOR_KCAL,
            tolerance_ratio: DEFAULT_TOLERANCE_RATIO,
        }
    }
}

impl ValidationConfig {
    /// Allowed |expected - stated| difference for a stated calorie value
    #[must_use]
    pub fn tolerance_for(&self, calories: f64) -> f64 {
        self.tolerance_floor_kcal
            .max((self.tolerance_ratio * calories).round())
    }

    /// Validate tolerance settings
    ///
    /// # Errors
    ///
    /// Returns an error if the floor is negative or not finite, or the ratio is outside 0-1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance_floor_kcal.is_finite() || self.tolerance_floor_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "tolerance_floor_kcal must be a non-negative number",
            ));
        }
        if !(0.0..=1.0).contains(&self.tolerance_ratio) {
            return Err(ConfigError::InvalidRange(
                "tolerance_ratio must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        let config = ValidationConfig::default();
        assert_eq!(config.tolerance_for(500.0), 50.0);
        assert_eq!(config.tolerance_for(100.0), 20.0);
        assert_eq!(config.tolerance_for(0.0), 20.0);
        assert_eq!(config.tolerance_for(310.0), 31.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let negative_floor = ValidationConfig {
            tolerance_floor_kcal: -1.0,
            ..ValidationConfig::default()
        };
        assert!(negative_floor.validate().is_err());

        let ratio = ValidationConfig {
            tolerance_ratio: 1.5,
            ..ValidationConfig::default()
        };
        assert!(ratio.validate().is_err());

        let nan_ratio = ValidationConfig {
            tolerance_ratio: f64::NAN,
            ..ValidationConfig::default()
        };
        assert!(nan_ratio.validate().is_err());

        assert!(ValidationConfig::default().validate().is_ok());
    }
}
