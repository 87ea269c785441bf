// ABOUTME: Unified error type and error codes shared across the Forkful workspace
// ABOUTME: Provides AppError, ErrorCode, ErrorContext, and a JSON-renderable ErrorResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! # Unified Error Handling System
//!
//! Centralized error handling for the nutrition engine and its callers.
//! Domain-specific errors (nutrition rejections, configuration errors) are
//! defined next to the code that raises them and convert into [`AppError`]
//! when they cross the library boundary.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a precondition
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Numeric value outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Nutrition data (4500-4599)
    /// External record has no usable calorie or macro values
    #[serde(rename = "NUTRITION_UNAVAILABLE")]
    NutritionUnavailable = 4500,
    /// External record misses more fields than can be inferred
    #[serde(rename = "NUTRITION_INCOMPLETE")]
    NutritionIncomplete = 4501,
    /// Calories disagree with the macro energy balance beyond tolerance
    #[serde(rename = "NUTRITION_INCONSISTENT")]
    NutritionInconsistent = 4502,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration loaded but failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::NutritionUnavailable => "Cannot import: no nutrition data",
            Self::NutritionIncomplete => "Cannot import: too many nutrition values are missing",
            Self::NutritionInconsistent => {
                "Cannot import: calories do not match the macronutrient breakdown"
            }
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the error describes bad external data rather than a caller bug
    #[must_use]
    pub const fn is_data_rejection(&self) -> bool {
        matches!(
            self,
            Self::NutritionUnavailable | Self::NutritionIncomplete | Self::NutritionInconsistent
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the external record or log item involved
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Serialization or parse failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// JSON error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable description plus message
    pub message: String,
    /// Resource the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Structured details
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.to_string(),
                resource_id: error.context.resource_id,
                details: error.context.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nutrition_codes_are_data_rejections() {
        assert!(ErrorCode::NutritionUnavailable.is_data_rejection());
        assert!(ErrorCode::NutritionIncomplete.is_data_rejection());
        assert!(ErrorCode::NutritionInconsistent.is_data_rejection());
        assert!(!ErrorCode::InvalidInput.is_data_rejection());
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::invalid_input("quantity must be finite").with_resource_id("fdc:1234");

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.context.resource_id.as_deref(), Some("fdc:1234"));
        assert!(error.to_string().contains("quantity must be finite"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::new(ErrorCode::NutritionIncomplete, "2 fields missing")
            .with_details(json!({ "missing": ["protein_g", "fat_g"] }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("NUTRITION_INCOMPLETE"));
        assert!(json.contains("protein_g"));
    }

    #[test]
    fn test_from_serde_error_keeps_source() {
        let parse_error = serde_json::from_str::<Value>("{not json").unwrap_err();
        let error = AppError::from(parse_error);

        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }
}
