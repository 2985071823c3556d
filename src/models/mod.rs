mod additional;
mod product;
mod recipe;
mod unit;

pub use additional::{AdditionalLine, LineField};
pub(crate) use product::is_positive;
pub use product::{Product, PurchaseData};
pub use recipe::{Ingredient, Recipe, SubPreparation};
pub use unit::{Unit, UnitFamily};
