// ABOUTME: Normalize command for forkful-cli
// ABOUTME: Runs an external record through normalization and validation and prints the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use forkful::config::NutritionEngineConfig;
use forkful::errors::{AppError, ErrorResponse};
use forkful::external::ExternalNutrientRecord;
use forkful::intelligence::nutrition::import_external_record;
use forkful::models::FoodLogItem;
use tracing::info;

use crate::helpers::json_io::{print_json, read_json};

/// Exit status for a record the engine refuses to log
const EXIT_REJECTED: u8 = 2;

/// Normalize a record file; rejections print an error response and exit with status 2
pub fn run(path: &Path, as_item: bool) -> Result<ExitCode> {
    let record: ExternalNutrientRecord = read_json(path)?;
    let config = &NutritionEngineConfig::global().validation;

    match import_external_record(&record, config) {
        Ok(nutrition) => {
            info!(record = %record.resource_id(), "Record accepted");
            if as_item {
                let name = record
                    .description
                    .clone()
                    .unwrap_or_else(|| record.resource_id());
                let item =
                    FoodLogItem::from_nutrition(name, &nutrition, record.serving_weight_grams())?;
                print_json(&item)?;
            } else {
                print_json(&nutrition)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(rejection) => {
            let error = AppError::from(rejection).with_resource_id(record.resource_id());
            print_json(&ErrorResponse::from(error))?;
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}
