use dialoguer::{Confirm, Input, Select};

use crate::error::{CostError, Result};
use crate::models::{AdditionalLine, LineField, PurchaseData, Recipe, Unit};
use crate::state::{Catalog, OverrideField};

use super::render::format_quantity;

/// Actions offered by the interactive editing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    ShowTable,
    ToggleEdit,
    EditPurchase,
    AddLine,
    EditLine,
    RemoveLine,
    SwitchRecipe,
    Quit,
}

impl SessionAction {
    const ALL: [SessionAction; 8] = [
        SessionAction::ShowTable,
        SessionAction::ToggleEdit,
        SessionAction::EditPurchase,
        SessionAction::AddLine,
        SessionAction::EditLine,
        SessionAction::RemoveLine,
        SessionAction::SwitchRecipe,
        SessionAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            SessionAction::ShowTable => "Show cost table",
            SessionAction::ToggleEdit => "Toggle edit mode for an ingredient",
            SessionAction::EditPurchase => "Edit purchase size / price / unit",
            SessionAction::AddLine => "Add additional line",
            SessionAction::EditLine => "Edit additional line",
            SessionAction::RemoveLine => "Remove additional line",
            SessionAction::SwitchRecipe => "Switch recipe",
            SessionAction::Quit => "Quit",
        }
    }
}

/// Prompt for the next editing action.
pub fn prompt_action() -> Result<SessionAction> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(SessionAction::ALL[selection])
}

/// Prompt for a number, rejecting anything that does not parse.
pub fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format_quantity(default))
        .interact_text()?;

    input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| CostError::InvalidInput(format!("Invalid number: {}", input)))
}

pub fn prompt_text(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?)
}

pub fn prompt_unit(current: Unit) -> Result<Unit> {
    let labels: Vec<&str> = Unit::ALL.iter().map(|u| u.as_str()).collect();
    let default = Unit::ALL.iter().position(|&u| u == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Unit")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(Unit::ALL[selection])
}

/// Pick a recipe from the catalog. `None` if the user backs out.
pub fn prompt_recipe(catalog: &Catalog) -> Result<Option<String>> {
    let mut options: Vec<&str> = catalog.recipe_names();
    options.push("Cancel");

    let selection = Select::new()
        .with_prompt("Choose a recipe")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(catalog.recipes().get(selection).map(|r| r.name.clone()))
}

/// Pick an ingredient of `recipe` by name. `None` if the user backs out.
pub fn prompt_ingredient(recipe: &Recipe) -> Result<Option<String>> {
    let mut names: Vec<String> = Vec::new();
    for ingredient in recipe.ingredients() {
        if !names.contains(&ingredient.name) {
            names.push(ingredient.name.clone());
        }
    }

    let mut options = names.clone();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Which ingredient?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(names.get(selection).cloned())
}

/// Pick one purchase field and its new value.
pub fn prompt_override_field(current: PurchaseData) -> Result<Option<OverrideField>> {
    let options = [
        format!("Size ({} {})", format_quantity(current.size), current.unit),
        format!("Price ({})", format_quantity(current.price)),
        format!("Unit ({})", current.unit),
        "Cancel".to_string(),
    ];

    let selection = Select::new()
        .with_prompt("Which field?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Some(OverrideField::Size(prompt_number("Purchased size", current.size)?)),
        1 => Some(OverrideField::Price(prompt_number("Purchased price", current.price)?)),
        2 => Some(OverrideField::Unit(prompt_unit(current.unit)?)),
        _ => None,
    })
}

/// Pick an additional line. `None` if there are none or the user backs out.
pub fn prompt_line_index(lines: &[AdditionalLine]) -> Result<Option<usize>> {
    if lines.is_empty() {
        println!("There are no additional lines.");
        return Ok(None);
    }

    let mut options: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let name = if l.name.is_empty() { "(unnamed)" } else { l.name.as_str() };
            format!("{}. {}", i + 1, name)
        })
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Which line?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < lines.len()).then_some(selection))
}

/// Pick one field of an additional line and its new value.
pub fn prompt_line_field(line: &AdditionalLine) -> Result<Option<LineField>> {
    let options = [
        format!("Name ({})", line.name),
        format!("Quantity ({})", format_quantity(line.quantity)),
        format!("Purchased size ({})", format_quantity(line.size)),
        format!("Purchased price ({})", format_quantity(line.price)),
        format!("Unit ({})", line.unit),
        "Cancel".to_string(),
    ];

    let selection = Select::new()
        .with_prompt("Which field?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => Some(LineField::Name(prompt_text("Name", &line.name)?)),
        1 => Some(LineField::Quantity(prompt_number("Quantity", line.quantity)?)),
        2 => Some(LineField::Size(prompt_number("Purchased size", line.size)?)),
        3 => Some(LineField::Price(prompt_number("Purchased price", line.price)?)),
        4 => Some(LineField::Unit(prompt_unit(line.unit)?)),
        _ => None,
    })
}

/// Prompt for every field of a new additional line.
pub fn prompt_new_line() -> Result<AdditionalLine> {
    let name = prompt_text("Name of the additional", "")?;
    let quantity = prompt_number("Quantity", 0.0)?;
    let size = prompt_number("Purchased size", 0.0)?;
    let price = prompt_number("Purchased price", 0.0)?;
    let unit = prompt_unit(Unit::Un)?;
    Ok(AdditionalLine::new(name, quantity, size, price, unit))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
