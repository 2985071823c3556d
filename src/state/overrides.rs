use std::collections::HashMap;

use crate::costing::conversion::convert;
use crate::error::{CostError, Result};
use crate::models::{PurchaseData, Unit};

/// User-entered purchase data for one ingredient. Unset fields fall back to
/// the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PurchaseOverride {
    pub size: Option<f64>,
    pub price: Option<f64>,
    pub unit: Option<Unit>,
}

/// A single field edit to a purchase override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverrideField {
    Size(f64),
    Price(f64),
    Unit(Unit),
}

/// Purchase overrides and edit-mode flags, keyed by ingredient name.
#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    overrides: HashMap<String, PurchaseOverride>,
    editable: HashMap<String, bool>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one field into the override for `name`.
    ///
    /// A unit change rewrites the stored size into the new unit. If the old
    /// and new units are incompatible the entry is left untouched and
    /// [`CostError::IncompatibleUnits`] is returned.
    pub fn set_override(&mut self, name: &str, field: OverrideField) -> Result<()> {
        self.apply(name, field, None)
    }

    /// Like [`set_override`](Self::set_override), but a unit change on an
    /// entry without a stored unit or size starts from `defaults`, the data
    /// the entry currently resolves against.
    pub fn set_override_with_defaults(
        &mut self,
        name: &str,
        field: OverrideField,
        defaults: PurchaseData,
    ) -> Result<()> {
        self.apply(name, field, Some(defaults))
    }

    fn apply(&mut self, name: &str, field: OverrideField, defaults: Option<PurchaseData>) -> Result<()> {
        let mut entry = self.overrides.get(name).copied().unwrap_or_default();

        match field {
            OverrideField::Size(size) => entry.size = Some(size),
            OverrideField::Price(price) => entry.price = Some(price),
            OverrideField::Unit(new_unit) => {
                let previous = entry.unit.or(defaults.map(|d| d.unit));
                let size = entry.size.or(defaults.map(|d| d.size));

                if let Some(previous) = previous.filter(|&u| u != new_unit) {
                    if !previous.is_compatible_with(new_unit) {
                        return Err(CostError::IncompatibleUnits {
                            from: previous,
                            to: new_unit,
                        });
                    }
                    if let Some(size) = size {
                        entry.size = Some(convert(size, previous, new_unit)?);
                    }
                }
                entry.unit = Some(new_unit);
            }
        }

        self.overrides.insert(name.to_string(), entry);
        Ok(())
    }

    pub fn get_override(&self, name: &str) -> Option<&PurchaseOverride> {
        self.overrides.get(name)
    }

    /// Flip edit mode for `name` and return the new state.
    pub fn toggle_edit(&mut self, name: &str) -> bool {
        let flag = self.editable.entry(name.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn is_editable(&self, name: &str) -> bool {
        self.editable.get(name).copied().unwrap_or(false)
    }

    /// Clear all overrides and edit flags.
    pub fn reset(&mut self) {
        self.overrides.clear();
        self.editable.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty() && self.editable.is_empty()
    }
}
