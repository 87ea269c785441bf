// ABOUTME: Decimal rounding helpers used at the boundary of every computed nutrition value
// ABOUTME: Whole-unit, one-decimal, and quantity display precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

//! Rounding is applied once per computed result, never carried across
//! successive conversions.

use crate::constants::precision::{ONE_DECIMAL, QUANTITY_DISPLAY_DECIMALS};

/// Round to a fixed number of decimal places
///
/// Non-finite input is returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to one decimal place (`round(x * 10) / 10`)
#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, ONE_DECIMAL)
}

/// Clamp a quantity to its two-decimal display precision
#[must_use]
pub fn display_quantity(value: f64) -> f64 {
    round_to(value, QUANTITY_DISPLAY_DECIMALS)
}

/// Keep finite values, drop NaN and infinities
#[must_use]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
