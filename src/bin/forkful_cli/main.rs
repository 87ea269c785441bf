// ABOUTME: Forkful CLI - command-line front end for the nutrition engine
// ABOUTME: Normalizes external nutrient records and edits logged food items from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful Contributors
//!
//! Usage:
//! ```bash
//! # Normalize and validate a FoodData Central record
//! forkful-cli normalize record.json
//!
//! # Same, but emit a log item ready for editing
//! forkful-cli normalize record.json --as-item > item.json
//!
//! # Set a logged item to 150 grams
//! forkful-cli edit --item item.json --quantity 150 --unit grams
//!
//! # Show the same amount in the other unit
//! forkful-cli toggle --item item.json --unit serving
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use forkful::logging::LoggingConfig;
use forkful::models::BaseUnit;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "forkful-cli",
    about = "Forkful nutrition engine CLI",
    long_about = "Normalize external nutrient records and convert logged food items between servings and grams."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Normalize and validate an external nutrient record
    Normalize {
        /// Path to a FoodData Central JSON record
        file: PathBuf,

        /// Emit a food log item instead of the normalized record
        #[arg(long)]
        as_item: bool,
    },

    /// Set a logged item's quantity and unit
    Edit {
        /// Path to a food log item JSON file
        #[arg(long)]
        item: PathBuf,

        /// New quantity in the target unit
        #[arg(long, allow_negative_numbers = true)]
        quantity: f64,

        /// Target unit (serving or grams)
        #[arg(long, value_parser = parse_unit)]
        unit: BaseUnit,
    },

    /// Show a logged item's amount in another unit
    Toggle {
        /// Path to a food log item JSON file
        #[arg(long)]
        item: PathBuf,

        /// Target unit (serving or grams)
        #[arg(long, value_parser = parse_unit)]
        unit: BaseUnit,
    },
}

fn parse_unit(s: &str) -> Result<BaseUnit, String> {
    BaseUnit::parse(s).map_err(|e| e.message)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::with_level(log_level).init()?;
    debug!("Forkful CLI");

    match cli.command {
        Command::Normalize { file, as_item } => commands::normalize::run(&file, as_item),
        Command::Edit {
            item,
            quantity,
            unit,
        } => commands::serving::edit(&item, quantity, unit),
        Command::Toggle { item, unit } => commands::serving::toggle(&item, unit),
    }
}
