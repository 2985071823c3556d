use std::io;
use std::path::Path;

use crate::costing::round_half_up;
use crate::error::Result;
use crate::state::CostingSession;

use super::render::format_quantity;

fn optional(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the selected recipe's cost breakdown as CSV. Costs are raw whole
/// currency units; uncomputable costs are left empty.
pub fn write_breakdown_csv<W: io::Write>(session: &CostingSession, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "section",
        "name",
        "quantity",
        "unit",
        "purchase_size",
        "purchase_unit",
        "purchase_price",
        "cost",
        "leftover",
    ])?;

    for row in session.breakdown() {
        wtr.write_record([
            row.subpreparation.to_string(),
            row.ingredient.name.clone(),
            format_quantity(row.ingredient.quantity),
            row.ingredient.unit.to_string(),
            format_quantity(row.purchase.size),
            row.purchase.unit.to_string(),
            format_quantity(row.purchase.price),
            optional(row.result.map(|r| r.cost)),
            row.result
                .map(|r| format_quantity(r.leftover))
                .unwrap_or_default(),
        ])?;
    }

    for (i, line) in session.lines().iter().enumerate() {
        wtr.write_record([
            "additional".to_string(),
            line.name.clone(),
            format_quantity(line.quantity),
            line.unit.to_string(),
            format_quantity(line.size),
            line.unit.to_string(),
            format_quantity(line.price),
            optional(session.line_cost(i).map(|c| c.cost)),
            String::new(),
        ])?;
    }

    if let Some(totals) = session.session_totals() {
        let per_portion = totals
            .grand_cost_per_portion
            .map(|v| format!("{}", round_half_up(v)))
            .unwrap_or_default();
        let total = totals.grand_total.to_string();
        wtr.write_record(["total", "", "", "", "", "", "", total.as_str(), ""])?;
        wtr.write_record(["per_portion", "", "", "", "", "", "", per_portion.as_str(), ""])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the breakdown to a file.
pub fn export_breakdown(session: &CostingSession, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_breakdown_csv(session, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdditionalLine, Ingredient, Product, Recipe, SubPreparation, Unit};
    use crate::state::Catalog;

    #[test]
    fn test_breakdown_csv() {
        let catalog = Catalog::new(
            vec![Recipe {
                name: "Pan".to_string(),
                portions: 2,
                subpreparations: vec![SubPreparation {
                    name: "Masa".to_string(),
                    ingredients: vec![
                        Ingredient::new("Harina", 500.0, Unit::G),
                        Ingredient::new("Sal", 5.0, Unit::G),
                    ],
                }],
            }],
            vec![Product {
                name: "Harina".to_string(),
                quantity: 1.0,
                unit: Unit::Kg,
                price: 2000.0,
                currency: "CLP".to_string(),
            }],
        );
        let mut session = CostingSession::new(&catalog);
        session.select_recipe("Pan").unwrap();
        session.push_line(AdditionalLine::new("Gas", 2.0, 100.0, 500.0, Unit::Un));

        let mut out = Vec::new();
        write_breakdown_csv(&session, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Masa,Harina,500,g,1,kg,2000,1000,500");
        assert_eq!(lines[2], "Masa,Sal,5,g,0,g,0,,");
        assert_eq!(lines[3], "additional,Gas,2,un,100,un,500,10,");
        assert_eq!(lines[4], "total,,,,,,,1010,");
        assert_eq!(lines[5], "per_portion,,,,,,,505,");
    }
}
