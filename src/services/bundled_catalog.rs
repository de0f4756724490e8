// src/services/bundled_catalog.rs
//
// Dataset compiled into the binary, used to seed an empty or unreadable store.

use crate::domain::{CountriesDocument, IngredientsDocument, RecipesDocument};
use crate::error::{AppError, AppResult};
use crate::repositories::CatalogDocuments;

const BUNDLED_INGREDIENTS: &str = include_str!("../../assets/data/ingredients.json");
const BUNDLED_RECIPES: &str = include_str!("../../assets/data/recipes.json");
const BUNDLED_COUNTRIES: &str = include_str!("../../assets/data/countries.json");

/// Parse and validate the shipped documents.
pub fn bundled_documents() -> AppResult<CatalogDocuments> {
    parse_documents(BUNDLED_INGREDIENTS, BUNDLED_RECIPES, BUNDLED_COUNTRIES)
}

pub(crate) fn parse_documents(
    ingredients: &str,
    recipes: &str,
    countries: &str,
) -> AppResult<CatalogDocuments> {
    let ingredients: IngredientsDocument =
        serde_json::from_str(ingredients).map_err(|e| AppError::malformed("ingredients", e))?;
    let recipes: RecipesDocument =
        serde_json::from_str(recipes).map_err(|e| AppError::malformed("recipes", e))?;
    let countries: CountriesDocument =
        serde_json::from_str(countries).map_err(|e| AppError::malformed("countries", e))?;

    ingredients
        .validate()
        .map_err(|e| AppError::malformed("ingredients", e))?;
    recipes
        .validate()
        .map_err(|e| AppError::malformed("recipes", e))?;

    Ok(CatalogDocuments {
        ingredients,
        recipes,
        countries,
    })
}
