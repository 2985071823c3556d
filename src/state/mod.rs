mod catalog;
mod overrides;
mod persistence;
mod session;

pub use catalog::Catalog;
pub use overrides::{OverrideField, OverrideStore, PurchaseOverride};
pub use persistence::{load_catalog, load_products, load_recipes, try_load_catalog};
pub use session::CostingSession;
