use crate::costing::constants::{
    CURRENCY_SYMBOL, NOT_AVAILABLE, SHORTFALL_MARKER, THOUSANDS_SEPARATOR,
};
use crate::costing::{IngredientCost, SessionTotals, round_half_up};
use crate::models::{Recipe, Unit};
use crate::state::{Catalog, CostingSession};

/// Format a price in whole CLP, `es-CL` style: `$1.234.567`, `-$2.500`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let rounded = round_half_up(value) as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped)
}

/// Format an optional price, using the "not available" marker for `None`.
pub fn format_optional_price(value: Option<f64>) -> String {
    value.map(format_price).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Quantities print without a trailing `.0`, with at most three decimals.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn format_leftover(result: Option<IngredientCost>, unit: Unit) -> String {
    match result {
        Some(r) if r.is_shortfall() => {
            format!("{} {} {}", format_quantity(r.leftover), unit, SHORTFALL_MARKER)
        }
        Some(r) => format!("{} {}", format_quantity(r.leftover), unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// List the recipes of a catalog.
pub fn display_recipe_list(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No recipes available.");
        return;
    }

    println!();
    println!("=== Recipes ({}) ===", catalog.recipes().len());
    println!();

    for recipe in catalog.recipes() {
        println!(
            "  {} - {} portions, {} ingredients",
            recipe.name,
            recipe.portions,
            recipe.ingredient_count()
        );
    }

    println!();
}

/// Display the selected recipe's cost table, including additional lines.
pub fn display_cost_table(session: &CostingSession) {
    let Some(recipe) = session.selected() else {
        println!("No recipe selected.");
        return;
    };

    let rows = session.breakdown();
    let name_width = rows
        .iter()
        .map(|r| r.ingredient.name.chars().count())
        .chain(session.lines().iter().map(|l| l.name.chars().count()))
        .max()
        .unwrap_or(10)
        .max(10);

    println!();
    println!("=== {} ===", recipe.name);
    println!(
        "      {:<width$}  {:>12}  {:>12}  {:>12}  {:>10}  {:>12}",
        "Ingredient",
        "Quantity",
        "Purchased",
        "Price",
        "Cost",
        "Leftover",
        width = name_width
    );

    let mut current_sub = "";
    for (i, row) in rows.iter().enumerate() {
        if row.subpreparation != current_sub {
            current_sub = row.subpreparation;
            println!();
            println!("  [{}]", current_sub);
        }

        let name = &row.ingredient.name;
        let marker = if session.is_editable(name) { "*" } else { " " };

        println!(
            "{:>3}.{} {:<width$}  {:>12}  {:>12}  {:>12}  {:>10}  {:>12}",
            i + 1,
            marker,
            name,
            format!("{} {}", format_quantity(row.ingredient.quantity), row.ingredient.unit),
            format!("{} {}", format_quantity(row.purchase.size), row.purchase.unit),
            format_price(row.purchase.price),
            format_optional_price(row.result.map(|r| r.cost as f64)),
            format_leftover(row.result, row.ingredient.unit),
            width = name_width
        );
    }

    if !session.lines().is_empty() {
        println!();
        println!("  [Additional]");
        for (i, line) in session.lines().iter().enumerate() {
            let name = if line.name.is_empty() { "(unnamed)" } else { line.name.as_str() };
            println!(
                "{:>3}.  {:<width$}  {:>12}  {:>12}  {:>12}  {:>10}",
                i + 1,
                name,
                format!("{} {}", format_quantity(line.quantity), line.unit),
                format!("{} {}", format_quantity(line.size), line.unit),
                format_price(line.price),
                format_optional_price(session.line_cost(i).map(|c| c.cost as f64)),
                width = name_width
            );
        }
    }

    println!();
}

/// Display recipe totals and cost per portion.
pub fn display_summary(recipe: &Recipe, totals: &SessionTotals) {
    println!("--- Summary ---");
    println!("Recipe: {}", recipe.name);
    println!("Portions: {}", recipe.portions);
    println!("Ingredient cost: {}", format_price(totals.recipe.total_cost as f64));
    if totals.additional_cost != 0 {
        println!("Additional cost: {}", format_price(totals.additional_cost as f64));
    }
    println!("Total cost: {}", format_price(totals.grand_total as f64));
    println!(
        "Cost per portion: {}",
        format_optional_price(totals.grand_cost_per_portion)
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_grouping() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(999.0), "$999");
        assert_eq!(format_price(1000.0), "$1.000");
        assert_eq!(format_price(1234567.0), "$1.234.567");
        assert_eq!(format_price(-2500.0), "-$2.500");
    }

    #[test]
    fn test_format_price_rounds() {
        assert_eq!(format_price(370.5), "$371");
        assert_eq!(format_price(f64::INFINITY), "N/A");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(500.0), "500");
        assert_eq!(format_quantity(0.25), "0.25");
        assert_eq!(format_quantity(1.0 / 3.0), "0.333");
    }

    #[test]
    fn test_leftover_marks_shortfall() {
        let short = IngredientCost { cost: 10, leftover: -250.0 };
        assert_eq!(format_leftover(Some(short), Unit::G), "-250 g !");
        assert_eq!(format_leftover(None, Unit::G), "N/A");
    }
}
