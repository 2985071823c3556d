use crate::costing::constants::FAMILY_FACTOR;
use crate::error::{CostError, Result};
use crate::models::Unit;

/// How many of the family's base unit (g, mL, un) one `unit` holds.
#[inline]
fn base_factor(unit: Unit) -> f64 {
    match unit {
        Unit::Kg | Unit::L => FAMILY_FACTOR,
        Unit::G | Unit::Ml | Unit::Un => 1.0,
    }
}

/// Convert `amount` from one unit to another within the same family.
///
/// `un` only converts to itself; any pairing across families fails with
/// [`CostError::IncompatibleUnits`].
pub fn convert(amount: f64, from: Unit, to: Unit) -> Result<f64> {
    if from == to {
        return Ok(amount);
    }

    if !from.is_compatible_with(to) {
        return Err(CostError::IncompatibleUnits { from, to });
    }

    Ok(amount * base_factor(from) / base_factor(to))
}
