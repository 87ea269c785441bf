// ABOUTME: Configuration error types for nutrition engine settings
// ABOUTME: Defines error variants for invalid ranges, parse failures, and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Related values are inconsistent with each other
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let converted = match &error {
            ConfigError::Parse(_) => Self::config(error.to_string()),
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                Self::new(ErrorCode::ConfigInvalid, error.to_string())
            }
        };
        converted.with_source(error)
    }
}
