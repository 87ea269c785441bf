// ABOUTME: Serving/gram edit commands for forkful-cli
// ABOUTME: Applies quantity edits and unit toggles to a food log item file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use forkful::intelligence::nutrition::{edit_serving, switch_unit};
use forkful::models::{BaseUnit, FoodLogItem};
use tracing::debug;

use crate::helpers::json_io::{print_json, read_json};

/// Print the edit result for a new quantity and unit
pub fn edit(path: &Path, quantity: f64, unit: BaseUnit) -> Result<ExitCode> {
    let item: FoodLogItem = read_json(path)?;
    debug!(item = %item.name, quantity, unit = ?unit, "Editing serving");
    print_json(&edit_serving(&item, quantity, unit))?;
    Ok(ExitCode::SUCCESS)
}

/// Print the edit result for the same amount in another unit
pub fn toggle(path: &Path, unit: BaseUnit) -> Result<ExitCode> {
    let item: FoodLogItem = read_json(path)?;
    debug!(item = %item.name, from = ?item.base_unit, to = ?unit, "Switching unit");
    print_json(&switch_unit(&item, unit))?;
    Ok(ExitCode::SUCCESS)
}
