use serde::Serialize;

use crate::costing::calculations::{
    IngredientCost, calculate_additional_cost, calculate_cost, resolve_purchase, try_calculate_cost,
};
use crate::models::{AdditionalLine, Ingredient, PurchaseData, Recipe};
use crate::state::{Catalog, OverrideStore};

/// Recipe-level cost summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeTotals {
    pub total_cost: i64,
    /// `None` when the recipe has zero portions.
    pub cost_per_portion: Option<f64>,
}

/// Recipe totals plus the free-form additional lines of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionTotals {
    pub recipe: RecipeTotals,
    pub additional_cost: i64,
    pub grand_total: i64,
    pub grand_cost_per_portion: Option<f64>,
}

/// One rendered row of a recipe cost table.
#[derive(Debug, Clone, PartialEq)]
pub struct CostLine<'a> {
    pub subpreparation: &'a str,
    pub ingredient: &'a Ingredient,
    pub purchase: PurchaseData,
    pub result: Option<IngredientCost>,
}

/// Divide a total across portions. Zero portions has no per-portion cost.
pub fn cost_per_portion(total_cost: i64, portions: u32) -> Option<f64> {
    if portions == 0 {
        return None;
    }
    Some(total_cost as f64 / portions as f64)
}

/// Sum every ingredient cost of a recipe. Uncomputable ingredients add 0.
///
/// Failures are not logged here; the breakdown reports them per row.
pub fn calculate_totals(recipe: &Recipe, overrides: &OverrideStore, catalog: &Catalog) -> RecipeTotals {
    let total_cost = recipe
        .ingredients()
        .filter_map(|ingredient| try_calculate_cost(ingredient, overrides, catalog).ok())
        .fold(0i64, |acc, c| acc.saturating_add(c.cost));

    RecipeTotals {
        total_cost,
        cost_per_portion: cost_per_portion(total_cost, recipe.portions),
    }
}

/// Per-ingredient rows in display order.
pub fn calculate_breakdown<'a>(
    recipe: &'a Recipe,
    overrides: &OverrideStore,
    catalog: &Catalog,
) -> Vec<CostLine<'a>> {
    recipe
        .subpreparations
        .iter()
        .flat_map(|sub| {
            sub.ingredients.iter().map(move |ingredient| {
                let defaults = catalog.defaults_for(ingredient);
                CostLine {
                    subpreparation: sub.name.as_str(),
                    ingredient,
                    purchase: resolve_purchase(overrides.get_override(&ingredient.name), defaults),
                    result: calculate_cost(ingredient, overrides, catalog),
                }
            })
        })
        .collect()
}

/// Sum of the computable additional line costs.
pub fn sum_additional(lines: &[AdditionalLine]) -> i64 {
    lines
        .iter()
        .filter_map(calculate_additional_cost)
        .fold(0i64, |acc, c| acc.saturating_add(c.cost))
}

pub fn calculate_session_totals(
    recipe: &Recipe,
    overrides: &OverrideStore,
    catalog: &Catalog,
    lines: &[AdditionalLine],
) -> SessionTotals {
    let totals = calculate_totals(recipe, overrides, catalog);
    let additional_cost = sum_additional(lines);
    let grand_total = totals.total_cost.saturating_add(additional_cost);

    SessionTotals {
        recipe: totals,
        additional_cost,
        grand_total,
        grand_cost_per_portion: cost_per_portion(grand_total, recipe.portions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, SubPreparation, Unit};
    use crate::state::OverrideField;

    fn product(name: &str, quantity: f64, unit: Unit, price: f64) -> Product {
        Product {
            name: name.to_string(),
            quantity,
            unit,
            price,
            currency: "CLP".to_string(),
        }
    }

    fn sample_catalog(portions: u32) -> Catalog {
        let recipe = Recipe {
            name: "Pan".to_string(),
            portions,
            subpreparations: vec![
                SubPreparation {
                    name: "Masa".to_string(),
                    ingredients: vec![
                        Ingredient::new("Harina", 500.0, Unit::G),
                        Ingredient::new("Agua", 300.0, Unit::Ml),
                    ],
                },
                SubPreparation {
                    name: "Cobertura".to_string(),
                    ingredients: vec![
                        Ingredient::new("Huevo", 1.0, Unit::Un),
                        Ingredient::new("Sésamo", 10.0, Unit::G),
                    ],
                },
            ],
        };
        Catalog::new(
            vec![recipe],
            vec![
                product("Harina", 1.0, Unit::Kg, 2000.0),
                product("Agua", 1.5, Unit::L, 900.0),
                product("Huevo", 12.0, Unit::Un, 3600.0),
            ],
        )
    }

    #[test]
    fn test_totals_skip_uncomputable() {
        let catalog = sample_catalog(4);
        let recipe = catalog.recipe("Pan").unwrap();
        let totals = calculate_totals(recipe, &OverrideStore::new(), &catalog);

        // 1000 (harina) + 180 (agua) + 300 (huevo) + 0 (sésamo, no product)
        assert_eq!(totals.total_cost, 1480);
        assert_eq!(totals.cost_per_portion, Some(370.0));
    }

    #[test]
    fn test_zero_portions_has_no_per_portion_cost() {
        let catalog = sample_catalog(0);
        let recipe = catalog.recipe("Pan").unwrap();
        let totals = calculate_totals(recipe, &OverrideStore::new(), &catalog);
        assert_eq!(totals.total_cost, 1480);
        assert_eq!(totals.cost_per_portion, None);
    }

    #[test]
    fn test_breakdown_keeps_display_order() {
        let catalog = sample_catalog(4);
        let recipe = catalog.recipe("Pan").unwrap();
        let rows = calculate_breakdown(recipe, &OverrideStore::new(), &catalog);

        let names: Vec<&str> = rows.iter().map(|r| r.ingredient.name.as_str()).collect();
        assert_eq!(names, vec!["Harina", "Agua", "Huevo", "Sésamo"]);
        assert_eq!(rows[2].subpreparation, "Cobertura");
        assert!(rows[3].result.is_none());
        assert_eq!(rows[3].purchase, PurchaseData::new(0.0, 0.0, Unit::G));
    }

    #[test]
    fn test_totals_match_breakdown_rows() {
        let catalog = sample_catalog(4);
        let recipe = catalog.recipe("Pan").unwrap();
        let mut overrides = OverrideStore::new();
        overrides.set_override("Agua", OverrideField::Unit(Unit::G)).unwrap();

        let rows = calculate_breakdown(recipe, &overrides, &catalog);
        let from_rows: i64 = rows.iter().filter_map(|r| r.result).map(|c| c.cost).sum();

        // Agua now resolves to grams against a mL recipe unit and drops out.
        assert!(rows[1].result.is_none());
        assert_eq!(calculate_totals(recipe, &overrides, &catalog).total_cost, from_rows);
        assert_eq!(from_rows, 1300);
    }

    #[test]
    fn test_session_totals_include_additional_lines() {
        let catalog = sample_catalog(4);
        let recipe = catalog.recipe("Pan").unwrap();
        let lines = vec![
            AdditionalLine::new("Gas", 2.0, 100.0, 500.0, Unit::Un),
            AdditionalLine::default(),
        ];

        let totals = calculate_session_totals(recipe, &OverrideStore::new(), &catalog, &lines);
        assert_eq!(totals.recipe.total_cost, 1480);
        assert_eq!(totals.additional_cost, 10);
        assert_eq!(totals.grand_total, 1490);
        assert_eq!(totals.grand_cost_per_portion, Some(372.5));
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let recipe = Recipe {
            name: "Caviar".to_string(),
            portions: 2,
            subpreparations: vec![SubPreparation {
                name: "Base".to_string(),
                ingredients: vec![
                    Ingredient::new("Beluga", 1.0, Unit::Kg),
                    Ingredient::new("Oscietra", 1.0, Unit::Kg),
                ],
            }],
        };
        let catalog = Catalog::new(
            vec![recipe],
            vec![
                product("Beluga", 1.0, Unit::Kg, 9e18),
                product("Oscietra", 1.0, Unit::Kg, 9e18),
            ],
        );
        let recipe = catalog.recipe("Caviar").unwrap();
        let lines = vec![AdditionalLine::new("Flete", 1.0, 1.0, 9e18, Unit::Un)];

        let totals = calculate_session_totals(recipe, &OverrideStore::new(), &catalog, &lines);
        assert_eq!(totals.recipe.total_cost, i64::MAX);
        assert_eq!(totals.grand_total, i64::MAX);
    }

    #[test]
    fn test_out_of_range_prices_add_nothing() {
        let catalog = sample_catalog(4);
        let recipe = catalog.recipe("Pan").unwrap();
        let mut overrides = OverrideStore::new();
        overrides.set_override("Harina", OverrideField::Price(1e21)).unwrap();
        overrides.set_override("Huevo", OverrideField::Price(1e21)).unwrap();

        // Only agua (180) is left in range.
        let totals = calculate_totals(recipe, &overrides, &catalog);
        assert_eq!(totals.total_cost, 180);
        assert_eq!(sum_additional(&[AdditionalLine::new("Flete", 1.0, 1.0, 1e19, Unit::Un)]), 0);
    }
}
