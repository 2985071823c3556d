use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::costing::constants::{DEFAULT_PRODUCTS_PATH, DEFAULT_RECIPES_PATH};

/// RecipeCost: price recipes from purchase data, portion by portion.
#[derive(Parser, Debug)]
#[command(name = "recipe_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(long, default_value = DEFAULT_RECIPES_PATH)]
    pub recipes: PathBuf,

    /// Path to the product catalog JSON file.
    #[arg(long, default_value = DEFAULT_PRODUCTS_PATH)]
    pub products: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List the recipes in the catalog.
    #[default]
    List,

    /// Show the cost table of a recipe using catalog prices.
    Cost {
        /// Recipe name (exact).
        recipe: String,
    },

    /// Interactively override purchase data and add extra cost lines.
    Edit {
        /// Recipe to start with; prompts when omitted.
        recipe: Option<String>,
    },

    /// Write a recipe's cost breakdown as CSV.
    Export {
        /// Recipe name (exact).
        recipe: String,

        /// Output CSV file.
        #[arg(short, long, default_value = "recipe_cost.csv")]
        out: PathBuf,
    },
}
