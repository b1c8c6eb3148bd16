// ABOUTME: Smart nutrition CLI for recipe calculation, ingredient lookup, and reference import
// ABOUTME: Wires environment configuration, logging, and the reference repository to subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Load reference rows into the SQLite database
//! smart-nutrition import --file reference.json
//!
//! # Calculate nutrition for a recipe
//! smart-nutrition calculate --file recipe.json --servings 4
//!
//! # Show which reference row an ingredient resolves to
//! smart-nutrition match "chicken breast"
//!
//! # Convert a quantity to grams
//! smart-nutrition convert 2 cups flour
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smart_nutrition::config::{DatabaseUrl, EngineConfig, MatchingConfig};
use smart_nutrition::logging::LoggingConfig;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "smart-nutrition",
    about = "Smart nutrition calculation engine",
    long_about = "Resolve recipe ingredients against a nutrition reference database and aggregate macro-nutrients."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Matching configuration JSON override
    #[arg(long, global = true)]
    matching_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate nutrition for a recipe JSON file
    Calculate {
        /// Request file: {"ingredients": [...], "servings": N} or a bare ingredient array
        #[arg(long)]
        file: PathBuf,

        /// Servings override
        #[arg(long)]
        servings: Option<f64>,

        /// Resolve ingredient lines concurrently
        #[arg(long)]
        concurrent: bool,
    },

    /// Show the reference row an ingredient name resolves to
    Match {
        /// Ingredient name
        name: String,

        /// Print every scored candidate instead of only the winner
        #[arg(long)]
        all: bool,
    },

    /// Convert a quantity of an ingredient to grams
    Convert {
        /// Numeric quantity
        #[arg(allow_hyphen_values = true)]
        quantity: f64,

        /// Unit ("g", "cup", "ml", "whole", ...)
        unit: String,

        /// Ingredient name, used for density lookups
        name: String,
    },

    /// Import reference rows from a JSON array into the SQLite database
    Import {
        /// JSON file holding an array of reference rows
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::for_cli(log_level).init()?;

    let mut config = EngineConfig::from_env()?;
    if let Some(url) = cli.database_url {
        config.database = DatabaseUrl::parse_url(&url);
    }
    if let Some(path) = cli.matching_config {
        config.matching = MatchingConfig::from_json_file(&path)?;
    }
    info!("{}", config.summary());

    match cli.command {
        Command::Calculate {
            file,
            servings,
            concurrent,
        } => commands::calculate::run(&config, &file, servings, concurrent).await?,
        Command::Match { name, all } => commands::reference::find(&config, &name, all).await?,
        Command::Convert {
            quantity,
            unit,
            name,
        } => commands::reference::convert(quantity, &unit, &name)?,
        Command::Import { file } => commands::reference::import(&config, &file).await?,
    }

    Ok(())
}
