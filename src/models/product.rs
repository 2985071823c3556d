use serde::{Deserialize, Serialize};

use super::Unit;
use crate::costing::constants::DEFAULT_CURRENCY;

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Default purchase data for an ingredient name.
///
/// `quantity` is the package size, expressed in `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Resolved purchase data: package size, package price, and the unit the
/// size is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PurchaseData {
    pub size: f64,
    pub price: f64,
    pub unit: Unit,
}

impl PurchaseData {
    pub fn new(size: f64, price: f64, unit: Unit) -> Self {
        Self { size, price, unit }
    }

    /// Whether both size and price are usable for costing.
    #[inline]
    pub fn is_sufficient(&self) -> bool {
        is_positive(self.size) && is_positive(self.price)
    }
}

impl From<&Product> for PurchaseData {
    fn from(product: &Product) -> Self {
        Self::new(product.quantity, product.price, product.unit)
    }
}

/// Positive and finite. Zero, negative, and NaN all count as missing data.
#[inline]
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
