/// Factor between the small and large unit of the mass and volume families
/// (g/kg, mL/L).
pub const FAMILY_FACTOR: f64 = 1000.0;

/// The only currency the calculator displays.
pub const DEFAULT_CURRENCY: &str = "CLP";

/// Currency symbol used when formatting prices.
pub const CURRENCY_SYMBOL: &str = "$";

/// Thousands separator for `es-CL` formatting.
pub const THOUSANDS_SEPARATOR: char = '.';

/// Marker shown in place of a cost that cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Marker appended to a negative leftover (purchase size shortfall).
pub const SHORTFALL_MARKER: &str = "!";

// ─────────────────────────────────────────────────────────────────────────────
// Catalog locations and lookup
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_RECIPES_PATH: &str = "data/Recipes.json";
pub const DEFAULT_PRODUCTS_PATH: &str = "data/Products.json";

/// Minimum Jaro-Winkler similarity for a recipe name suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;
