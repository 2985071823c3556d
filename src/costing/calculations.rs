use serde::Serialize;
use tracing::{debug, warn};

use crate::costing::conversion::convert;
use crate::error::{CostError, Result};
use crate::models::{AdditionalLine, Ingredient, PurchaseData, is_positive};
use crate::state::{Catalog, OverrideStore, PurchaseOverride};

/// Cost of one ingredient and what remains of the purchased package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IngredientCost {
    /// Whole currency units.
    pub cost: i64,
    /// In the ingredient's recipe unit. Negative means one package is not enough.
    pub leftover: f64,
}

impl IngredientCost {
    #[inline]
    pub fn is_shortfall(&self) -> bool {
        self.leftover < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdditionalCost {
    pub cost: i64,
}

/// Round half up to a whole unit.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

// 2^63, the first f64 past the i64 range.
const WHOLE_UNIT_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Round to whole currency units. `None` when the result does not fit in i64.
fn to_whole_units(value: f64) -> Option<i64> {
    let rounded = round_half_up(value);
    (rounded.is_finite() && rounded >= -WHOLE_UNIT_LIMIT && rounded < WHOLE_UNIT_LIMIT)
        .then_some(rounded as i64)
}

/// Two-tier purchase resolution: each overridden field wins, every other
/// field comes from the catalog defaults.
pub fn resolve_purchase(entry: Option<&PurchaseOverride>, defaults: PurchaseData) -> PurchaseData {
    match entry {
        Some(o) => PurchaseData {
            size: o.size.unwrap_or(defaults.size),
            price: o.price.unwrap_or(defaults.price),
            unit: o.unit.unwrap_or(defaults.unit),
        },
        None => defaults,
    }
}

/// Cost an ingredient against already-resolved purchase data.
pub fn cost_from_purchase(ingredient: &Ingredient, purchase: PurchaseData) -> Result<IngredientCost> {
    if !purchase.is_sufficient() {
        return Err(CostError::InsufficientData(ingredient.name.clone()));
    }

    let size = convert(purchase.size, purchase.unit, ingredient.unit)?;
    let cost = to_whole_units(ingredient.quantity / size * purchase.price)
        .ok_or_else(|| CostError::InsufficientData(ingredient.name.clone()))?;
    let leftover = round_half_up(size - ingredient.quantity);

    Ok(IngredientCost { cost, leftover })
}

/// Cost an ingredient, reporting why it could not be costed.
pub fn try_calculate_cost(
    ingredient: &Ingredient,
    overrides: &OverrideStore,
    catalog: &Catalog,
) -> Result<IngredientCost> {
    let defaults = catalog.defaults_for(ingredient);
    let purchase = resolve_purchase(overrides.get_override(&ingredient.name), defaults);
    cost_from_purchase(ingredient, purchase)
}

/// Cost an ingredient, or `None` when there is not enough data or the
/// purchase unit cannot be converted to the recipe unit.
pub fn calculate_cost(
    ingredient: &Ingredient,
    overrides: &OverrideStore,
    catalog: &Catalog,
) -> Option<IngredientCost> {
    match try_calculate_cost(ingredient, overrides, catalog) {
        Ok(cost) => Some(cost),
        Err(CostError::InsufficientData(name)) => {
            debug!(ingredient = %name, "no purchase size or price yet");
            None
        }
        Err(e) => {
            warn!(ingredient = %ingredient.name, error = %e, "ingredient cost not computable");
            None
        }
    }
}

/// Cost a free-form line. Its unit is not used: quantity and size are taken
/// as already expressed in the same unit.
pub fn calculate_additional_cost(line: &AdditionalLine) -> Option<AdditionalCost> {
    if !(is_positive(line.quantity) && is_positive(line.size) && is_positive(line.price)) {
        return None;
    }

    let cost = to_whole_units(line.quantity / line.size * line.price)?;
    Some(AdditionalCost { cost })
}
