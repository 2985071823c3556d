use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{CostError, Result};
use crate::models::{Product, Recipe};
use crate::state::Catalog;

#[derive(Debug, Deserialize)]
struct RecipeDocument {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

#[derive(Debug, Deserialize)]
struct ProductDocument {
    #[serde(default)]
    products: Vec<Product>,
}

fn read_document<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let load_error = |reason: String| CostError::CatalogLoad {
        path: path.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| load_error(e.to_string()))
}

/// Load recipes from a `{ "recipes": [...] }` document.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let doc: RecipeDocument = read_document(path)?;
    Ok(doc.recipes)
}

/// Load products from a `{ "products": [...] }` document.
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    let doc: ProductDocument = read_document(path)?;
    Ok(doc.products)
}

/// Load both catalogs, failing if either one cannot be read.
pub fn try_load_catalog<P: AsRef<Path>, Q: AsRef<Path>>(recipes_path: P, products_path: Q) -> Result<Catalog> {
    let recipes = load_recipes(recipes_path)?;
    let products = load_products(products_path)?;
    debug!(recipes = recipes.len(), products = products.len(), "catalog loaded");
    Ok(Catalog::new(recipes, products))
}

/// Load both catalogs. Any failure is logged and yields an empty catalog.
pub fn load_catalog<P: AsRef<Path>, Q: AsRef<Path>>(recipes_path: P, products_path: Q) -> Catalog {
    match try_load_catalog(recipes_path, products_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "continuing with an empty catalog");
            Catalog::empty()
        }
    }
}
