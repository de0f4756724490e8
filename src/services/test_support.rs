// src/services/test_support.rs
//
// Shared fixtures for service tests: an in-memory store and a small catalog
// (A: vegetarian, quick, easy, Greece; B: vegetarian, hard, Italy).

use std::sync::Arc;

use crate::db::{create_in_memory_pool, initialize_database, ConnectionPool};
use crate::domain::locale::english;
use crate::domain::{
    CountriesDocument, Difficulty, Ingredient, IngredientsDocument, LocalizedText, Recipe,
    RecipeIngredient, RecipesDocument,
};
use crate::integrations::MockRemoteCatalog;
use crate::repositories::{CatalogDocuments, CatalogRepository, SqliteCatalogRepository};
use crate::services::CatalogService;

pub fn test_pool() -> Arc<ConnectionPool> {
    let pool = create_in_memory_pool().unwrap();
    initialize_database(&pool.get().unwrap()).unwrap();
    Arc::new(pool)
}

fn translated(en: &str, el: &str) -> LocalizedText {
    let mut text = english(en);
    text.insert("el".to_string(), el.to_string());
    text
}

pub fn recipe(
    id: &str,
    name: &str,
    ingredients: &[&str],
    tags: &[&str],
    difficulty: Difficulty,
    country: &str,
) -> Recipe {
    let mut recipe = Recipe::new(id, english(name));
    recipe.ingredients = ingredients
        .iter()
        .map(|i| RecipeIngredient::new(*i, "1"))
        .collect();
    recipe.tags = tags.iter().map(|t| t.to_string()).collect();
    recipe.difficulty = Some(difficulty);
    recipe.country = Some(english(country));
    recipe
}

pub fn fixture_documents() -> CatalogDocuments {
    CatalogDocuments {
        ingredients: IngredientsDocument {
            ingredients: vec![
                Ingredient::new("tomato", translated("Tomato", "Ντομάτα"), "pcs"),
                Ingredient::new("onion", translated("Onion", "Κρεμμύδι"), "pcs"),
                Ingredient::new("garlic", translated("Garlic", "Σκόρδο"), "cloves"),
                Ingredient::new("feta", translated("Feta cheese", "Φέτα"), "g"),
            ],
        },
        recipes: RecipesDocument {
            recipes: vec![
                recipe(
                    "A",
                    "Greek Salad",
                    &["tomato", "onion", "feta"],
                    &["vegetarian", "quick"],
                    Difficulty::Easy,
                    "Greece",
                ),
                recipe(
                    "B",
                    "Risotto",
                    &["onion", "garlic"],
                    &["vegetarian"],
                    Difficulty::Hard,
                    "Italy",
                ),
            ],
        },
        countries: CountriesDocument::default(),
    }
}

/// A catalog service whose store already holds the fixture catalog
pub fn loaded_catalog_service(pool: Arc<ConnectionPool>) -> Arc<CatalogService> {
    let repo = SqliteCatalogRepository::new(pool);
    repo.save_all(&fixture_documents()).unwrap();

    let service = CatalogService::new(Arc::new(repo), Arc::new(MockRemoteCatalog::new()));
    service.load();
    Arc::new(service)
}
