use clap::Parser;
use tracing_subscriber::EnvFilter;

use recipe_cost_rs::cli::{Cli, Command};
use recipe_cost_rs::error::{CostError, Result};
use recipe_cost_rs::interface::{
    SessionAction, display_cost_table, display_recipe_list, display_summary, export_breakdown,
    format_optional_price, prompt_action, prompt_ingredient, prompt_line_field,
    prompt_line_index, prompt_new_line, prompt_override_field, prompt_recipe, prompt_yes_no,
};
use recipe_cost_rs::models::Recipe;
use recipe_cost_rs::state::{Catalog, CostingSession, load_catalog};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(&cli.recipes, &cli.products);
    let command = cli.command.unwrap_or_default();

    if catalog.is_empty() {
        println!("No recipes available. Check {}.", cli.recipes.display());
        return Ok(());
    }

    match command {
        Command::List => {
            display_recipe_list(&catalog);
            Ok(())
        }
        Command::Cost { recipe } => cmd_cost(&catalog, &recipe),
        Command::Edit { recipe } => cmd_edit(&catalog, recipe.as_deref()),
        Command::Export { recipe, out } => cmd_export(&catalog, &recipe, &out),
    }
}

/// Select `name`, printing a suggestion when it does not exist.
fn select_or_suggest<'a>(
    session: &mut CostingSession<'a>,
    name: &str,
) -> Result<Option<&'a Recipe>> {
    match session.select_recipe(name) {
        Ok(recipe) => Ok(Some(recipe)),
        Err(CostError::RecipeNotFound(_)) => {
            eprintln!("Recipe not found: {}", name);
            if let Some(suggestion) = session.catalog().closest_recipe(name) {
                eprintln!("Did you mean '{}'?", suggestion);
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn show(session: &CostingSession) {
    display_cost_table(session);
    if let (Some(recipe), Some(totals)) = (session.selected(), session.session_totals()) {
        display_summary(recipe, &totals);
    }
}

/// Print the cost table of a recipe with catalog prices.
fn cmd_cost(catalog: &Catalog, name: &str) -> Result<()> {
    let mut session = CostingSession::new(catalog);
    if select_or_suggest(&mut session, name)?.is_some() {
        show(&session);
    }
    Ok(())
}

/// Export the catalog-priced breakdown of a recipe.
fn cmd_export(catalog: &Catalog, name: &str, out: &std::path::Path) -> Result<()> {
    let mut session = CostingSession::new(catalog);
    if select_or_suggest(&mut session, name)?.is_none() {
        return Ok(());
    }

    export_breakdown(&session, out)?;
    println!("Cost breakdown written to {}", out.display());
    Ok(())
}

/// Interactive editing session.
fn cmd_edit(catalog: &Catalog, name: Option<&str>) -> Result<()> {
    let mut session = CostingSession::new(catalog);

    let selected = match name {
        Some(name) => select_or_suggest(&mut session, name)?,
        None => match prompt_recipe(catalog)? {
            Some(name) => Some(session.select_recipe(&name)?),
            None => None,
        },
    };
    if selected.is_none() {
        return Ok(());
    }

    show(&session);

    loop {
        match handle_action(&mut session, prompt_action()?) {
            Ok(true) => continue,
            Ok(false) => break,
            // Rejected edits are reported and the session carries on.
            Err(e @ (CostError::IncompatibleUnits { .. } | CostError::InvalidInput(_))) => {
                println!("{}", e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Apply one action. Returns `false` when the user wants to leave.
fn handle_action(session: &mut CostingSession, action: SessionAction) -> Result<bool> {
    let recipe = session.selected().ok_or(CostError::NoRecipeSelected)?;

    match action {
        SessionAction::ShowTable => show(session),

        SessionAction::ToggleEdit => {
            if let Some(name) = prompt_ingredient(recipe)? {
                let editable = session.toggle_edit(&name);
                println!(
                    "{} is now {}.",
                    name,
                    if editable { "editable" } else { "read-only" }
                );
            }
        }

        SessionAction::EditPurchase => {
            let Some(name) = prompt_ingredient(recipe)? else {
                return Ok(true);
            };
            if !session.is_editable(&name) {
                println!("{} is read-only. Toggle edit mode first.", name);
                return Ok(true);
            }
            let Some(ingredient) = recipe.find_ingredient(&name) else {
                return Ok(true);
            };

            if let Some(field) = prompt_override_field(session.resolved_for(ingredient))? {
                session.set_override(&name, field)?;
                let cost = session.cost_of(ingredient).map(|c| c.cost as f64);
                println!("{} now costs {}.", name, format_optional_price(cost));
            }
        }

        SessionAction::AddLine => {
            let line = prompt_new_line()?;
            let index = session.push_line(line);
            let cost = session.line_cost(index).map(|c| c.cost as f64);
            println!("Added line #{} costing {}.", index + 1, format_optional_price(cost));
        }

        SessionAction::EditLine => {
            let Some(index) = prompt_line_index(session.lines())? else {
                return Ok(true);
            };
            if let Some(field) = prompt_line_field(&session.lines()[index])? {
                session.update_line(index, field)?;
            }
        }

        SessionAction::RemoveLine => {
            if let Some(index) = prompt_line_index(session.lines())? {
                let removed = session.remove_line(index)?;
                println!("Removed line #{} ({}).", index + 1, removed.name);
            }
        }

        SessionAction::SwitchRecipe => {
            let has_edits = !session.overrides().is_empty() || !session.lines().is_empty();
            if has_edits && !prompt_yes_no("Switching recipes discards your edits. Continue?", false)? {
                return Ok(true);
            }
            if let Some(name) = prompt_recipe(session.catalog())? {
                session.select_recipe(&name)?;
                show(session);
            }
        }

        SessionAction::Quit => return Ok(false),
    }

    Ok(true)
}
