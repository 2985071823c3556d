use serde::{Deserialize, Serialize};

use super::Unit;

/// A quantity of one ingredient required by a subpreparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
        }
    }
}

/// A named group of ingredients within a recipe (e.g. "sauce", "dough").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPreparation {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub portions: u32,
    #[serde(default)]
    pub subpreparations: Vec<SubPreparation>,
}

impl Recipe {
    /// Every ingredient across all subpreparations, in display order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.subpreparations
            .iter()
            .flat_map(|sub| sub.ingredients.iter())
    }

    /// First ingredient with the given name, if any.
    pub fn find_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients().find(|i| i.name == name)
    }

    pub fn ingredient_count(&self) -> usize {
        self.subpreparations.iter().map(|s| s.ingredients.len()).sum()
    }
}
