// ABOUTME: Configuration management for the nutrition engine
// ABOUTME: Defaults, environment overrides, validation, and a process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! Engine configuration
//!
//! The engine functions take their settings as explicit arguments. This
//! module only decides what those settings are for a process:
//!
//! - `FORKFUL_TOLERANCE_FLOOR_KCAL` - minimum consistency tolerance in kcal
//! - `FORKFUL_TOLERANCE_RATIO` - tolerance as a fraction of stated calories
//!
//! The energy-density table is fixed and lives in
//! [`crate::constants::energy`].

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration error types
pub mod error;
/// Validation tolerance settings
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::ValidationConfig;

/// Environment variable overriding the tolerance floor
pub const ENV_TOLERANCE_FLOOR_KCAL: &str = "FORKFUL_TOLERANCE_FLOOR_KCAL";
/// Environment variable overriding the tolerance ratio
pub const ENV_TOLERANCE_RATIO: &str = "FORKFUL_TOLERANCE_RATIO";

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<NutritionEngineConfig> = OnceLock::new();

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionEngineConfig {
    /// Import validation settings
    pub validation: ValidationConfig,
}

impl NutritionEngineConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once per process. Invalid environment values fall back to
    /// defaults with a warning.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any section is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()
    }

    /// Apply a single environment variable override if set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            ENV_TOLERANCE_FLOOR_KCAL,
            &mut self.validation.tolerance_floor_kcal,
        )?;
        Self::apply_env_var(ENV_TOLERANCE_RATIO, &mut self.validation.tolerance_ratio)?;
        Ok(self)
    }
}
