use serde::{Deserialize, Serialize};

use super::Unit;

/// A free-form cost line entered by the user, with no catalog backing.
///
/// `quantity` and `size` are assumed to be in the same unit; `unit` is only
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdditionalLine {
    pub name: String,
    pub quantity: f64,
    pub size: f64,
    pub price: f64,
    pub unit: Unit,
}

impl AdditionalLine {
    pub fn new(name: impl Into<String>, quantity: f64, size: f64, price: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity,
            size,
            price,
            unit,
        }
    }

    /// Apply a single field edit.
    pub fn apply(&mut self, field: LineField) {
        match field {
            LineField::Name(name) => self.name = name,
            LineField::Quantity(v) => self.quantity = v,
            LineField::Size(v) => self.size = v,
            LineField::Price(v) => self.price = v,
            LineField::Unit(u) => self.unit = u,
        }
    }
}

/// A field-level edit to an additional line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineField {
    Name(String),
    Quantity(f64),
    Size(f64),
    Price(f64),
    Unit(Unit),
}
