pub mod aggregation;
pub mod calculations;
pub mod constants;
pub mod conversion;

pub use aggregation::{
    CostLine, RecipeTotals, SessionTotals, calculate_breakdown, calculate_session_totals,
    calculate_totals, cost_per_portion, sum_additional,
};
pub use calculations::{
    AdditionalCost, IngredientCost, calculate_additional_cost, calculate_cost, cost_from_purchase,
    resolve_purchase, round_half_up, try_calculate_cost,
};
pub use constants::*;
pub use conversion::convert;
