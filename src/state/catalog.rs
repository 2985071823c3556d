use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::costing::constants::SUGGESTION_THRESHOLD;
use crate::models::{Ingredient, Product, PurchaseData, Recipe};

/// Read-only recipe and product data, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    products: Vec<Product>,
    /// Product position by exact name. First occurrence wins.
    product_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, products: Vec<Product>) -> Self {
        let mut product_index = HashMap::new();
        for (i, product) in products.iter().enumerate() {
            product_index.entry(product.name.clone()).or_insert(i);
        }
        Self {
            recipes,
            products,
            product_index,
        }
    }

    /// A catalog with nothing selectable, used when loading fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Product with exactly this name (case-sensitive).
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.product_index.get(name).map(|&i| &self.products[i])
    }

    /// Default purchase data for an ingredient.
    ///
    /// Without a matching product this is `{0, 0, ingredient unit}`, which
    /// the cost calculator treats as "no cost computable".
    pub fn defaults_for(&self, ingredient: &Ingredient) -> PurchaseData {
        self.product(&ingredient.name)
            .map(PurchaseData::from)
            .unwrap_or_else(|| PurchaseData::new(0.0, 0.0, ingredient.unit))
    }

    /// Recipe with exactly this name.
    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn recipe_names(&self) -> Vec<&str> {
        self.recipes.iter().map(|r| r.name.as_str()).collect()
    }

    /// Closest recipe name to `input`, for "did you mean" hints.
    pub fn closest_recipe(&self, input: &str) -> Option<&str> {
        let needle = input.to_lowercase();
        self.recipes
            .iter()
            .map(|r| (r.name.as_str(), jaro_winkler(&r.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, _)| name)
    }

    /// True when no recipes are available to select.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    fn product(name: &str, price: f64) -> Product {
        Product {
            name: name.to_string(),
            quantity: 1.0,
            unit: Unit::Kg,
            price,
            currency: "CLP".to_string(),
        }
    }

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            portions: 2,
            subpreparations: Vec::new(),
        }
    }

    #[test]
    fn test_first_product_wins() {
        let catalog = Catalog::new(vec![], vec![product("Azúcar", 1500.0), product("Azúcar", 9999.0)]);
        assert_eq!(catalog.product("Azúcar").unwrap().price, 1500.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::new(vec![], vec![product("Azúcar", 1500.0)]);
        assert!(catalog.product("azúcar").is_none());
    }

    #[test]
    fn test_missing_product_sentinel() {
        let catalog = Catalog::empty();
        let ingredient = Ingredient::new("Leche", 200.0, Unit::Ml);
        assert_eq!(
            catalog.defaults_for(&ingredient),
            PurchaseData::new(0.0, 0.0, Unit::Ml)
        );
    }

    #[test]
    fn test_closest_recipe() {
        let catalog = Catalog::new(vec![recipe("Pan Amasado"), recipe("Empanadas")], vec![]);
        assert_eq!(catalog.closest_recipe("pan amasdo"), Some("Pan Amasado"));
        assert_eq!(catalog.closest_recipe("xyz"), None);
    }
}
