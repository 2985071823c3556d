use tracing::info;

use crate::costing::{
    self, AdditionalCost, CostLine, IngredientCost, RecipeTotals, SessionTotals,
};
use crate::error::{CostError, Result};
use crate::models::{AdditionalLine, Ingredient, LineField, PurchaseData, Recipe};
use crate::state::{Catalog, OverrideField, OverrideStore, PurchaseOverride};

/// Costing state for one user working on one recipe at a time.
///
/// Borrowing the catalog means a session can only exist once the catalogs
/// are loaded. Overrides, edit flags and additional lines belong to the
/// selected recipe and are dropped whenever a different recipe is selected.
pub struct CostingSession<'a> {
    catalog: &'a Catalog,
    selected: Option<&'a Recipe>,
    overrides: OverrideStore,
    lines: Vec<AdditionalLine>,
}

impl<'a> CostingSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selected: None,
            overrides: OverrideStore::new(),
            lines: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn selected(&self) -> Option<&'a Recipe> {
        self.selected
    }

    fn require_recipe(&self) -> Result<&'a Recipe> {
        self.selected.ok_or(CostError::NoRecipeSelected)
    }

    /// Select a recipe by exact name. Switching to a different recipe
    /// discards all session edits; reselecting the current one keeps them.
    pub fn select_recipe(&mut self, name: &str) -> Result<&'a Recipe> {
        let recipe = self
            .catalog
            .recipe(name)
            .ok_or_else(|| CostError::RecipeNotFound(name.to_string()))?;

        if self.selected.map(|r| r.name.as_str()) != Some(name) {
            self.reset();
            info!(recipe = %recipe.name, "recipe selected");
        }
        self.selected = Some(recipe);
        Ok(recipe)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.reset();
    }

    fn reset(&mut self) {
        self.overrides.reset();
        self.lines.clear();
    }

    // ── Overrides ───────────────────────────────────────────────────────────

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    pub fn defaults_for(&self, ingredient: &Ingredient) -> PurchaseData {
        self.catalog.defaults_for(ingredient)
    }

    pub fn override_for(&self, name: &str) -> Option<&PurchaseOverride> {
        self.overrides.get_override(name)
    }

    /// Purchase data after applying this session's override.
    pub fn resolved_for(&self, ingredient: &Ingredient) -> PurchaseData {
        costing::resolve_purchase(
            self.overrides.get_override(&ingredient.name),
            self.defaults_for(ingredient),
        )
    }

    /// Edit one purchase field of an ingredient in the selected recipe.
    ///
    /// A rejected unit change is returned as an error and leaves the
    /// override as it was.
    pub fn set_override(&mut self, name: &str, field: OverrideField) -> Result<()> {
        let recipe = self.require_recipe()?;
        let ingredient = recipe.find_ingredient(name).ok_or_else(|| {
            CostError::InvalidInput(format!("{} is not an ingredient of {}", name, recipe.name))
        })?;
        let defaults = self.catalog.defaults_for(ingredient);
        self.overrides
            .set_override_with_defaults(name, field, defaults)
    }

    pub fn toggle_edit(&mut self, name: &str) -> bool {
        self.overrides.toggle_edit(name)
    }

    pub fn is_editable(&self, name: &str) -> bool {
        self.overrides.is_editable(name)
    }

    // ── Additional lines ────────────────────────────────────────────────────

    pub fn lines(&self) -> &[AdditionalLine] {
        &self.lines
    }

    /// Append an empty line and return its index.
    pub fn add_line(&mut self) -> usize {
        self.push_line(AdditionalLine::default())
    }

    pub fn push_line(&mut self, line: AdditionalLine) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    pub fn update_line(&mut self, index: usize, field: LineField) -> Result<()> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or_else(|| CostError::InvalidInput(format!("no additional line #{}", index + 1)))?;
        line.apply(field);
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> Result<AdditionalLine> {
        if index >= self.lines.len() {
            return Err(CostError::InvalidInput(format!(
                "no additional line #{}",
                index + 1
            )));
        }
        Ok(self.lines.remove(index))
    }

    pub fn line_cost(&self, index: usize) -> Option<AdditionalCost> {
        self.lines.get(index).and_then(costing::calculate_additional_cost)
    }

    // ── Results ─────────────────────────────────────────────────────────────

    pub fn cost_of(&self, ingredient: &Ingredient) -> Option<IngredientCost> {
        costing::calculate_cost(ingredient, &self.overrides, self.catalog)
    }

    pub fn recipe_totals(&self) -> Option<RecipeTotals> {
        self.selected
            .map(|r| costing::calculate_totals(r, &self.overrides, self.catalog))
    }

    pub fn session_totals(&self) -> Option<SessionTotals> {
        self.selected.map(|r| {
            costing::calculate_session_totals(r, &self.overrides, self.catalog, &self.lines)
        })
    }

    pub fn breakdown(&self) -> Vec<CostLine<'a>> {
        self.selected
            .map(|r| costing::calculate_breakdown(r, &self.overrides, self.catalog))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, SubPreparation, Unit};

    fn catalog() -> Catalog {
        let recipe = |name: &str, ingredient: Ingredient| Recipe {
            name: name.to_string(),
            portions: 2,
            subpreparations: vec![SubPreparation {
                name: "Base".to_string(),
                ingredients: vec![ingredient],
            }],
        };
        Catalog::new(
            vec![
                recipe("Pan", Ingredient::new("Harina", 500.0, Unit::G)),
                recipe("Tortilla", Ingredient::new("Huevo", 3.0, Unit::Un)),
            ],
            vec![Product {
                name: "Harina".to_string(),
                quantity: 1.0,
                unit: Unit::Kg,
                price: 2000.0,
                currency: "CLP".to_string(),
            }],
        )
    }

    #[test]
    fn test_nothing_selected() {
        let catalog = catalog();
        let session = CostingSession::new(&catalog);
        assert!(session.recipe_totals().is_none());
        assert!(session.breakdown().is_empty());
    }

    #[test]
    fn test_unknown_recipe() {
        let catalog = catalog();
        let mut session = CostingSession::new(&catalog);
        assert!(matches!(
            session.select_recipe("Queque"),
            Err(CostError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn test_override_requires_selection() {
        let catalog = catalog();
        let mut session = CostingSession::new(&catalog);
        let result = session.set_override("Harina", OverrideField::Price(1.0));
        assert!(matches!(result, Err(CostError::NoRecipeSelected)));
    }

    #[test]
    fn test_reselecting_same_recipe_keeps_edits() {
        let catalog = catalog();
        let mut session = CostingSession::new(&catalog);
        session.select_recipe("Pan").unwrap();
        session.set_override("Harina", OverrideField::Price(3000.0)).unwrap();
        session.add_line();

        session.select_recipe("Pan").unwrap();
        assert!(session.override_for("Harina").is_some());
        assert_eq!(session.lines().len(), 1);
    }

    #[test]
    fn test_line_index_out_of_range() {
        let catalog = catalog();
        let mut session = CostingSession::new(&catalog);
        session.select_recipe("Pan").unwrap();
        assert!(session.remove_line(0).is_err());
        assert!(session.update_line(3, LineField::Price(1.0)).is_err());
    }
}
