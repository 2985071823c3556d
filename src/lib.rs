pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{CostError, Result};
pub use models::{AdditionalLine, Ingredient, Product, Recipe, SubPreparation, Unit};
pub use state::{Catalog, CostingSession};
