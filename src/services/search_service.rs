// src/services/search_service.rs

use std::sync::Arc;

use crate::domain::locale::any_translation_contains;
use crate::domain::{Catalog, Recipe};
use crate::services::CatalogService;

/// Free-text recipe search over names and ingredient names
pub struct SearchService {
    catalog: Arc<CatalogService>,
}

impl SearchService {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }

    /// Recipes whose name in any language contains `query`, or that use an
    /// ingredient whose name does. Case-insensitive; blank queries match nothing.
    pub fn search(&self, query: &str) -> Vec<Recipe> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let catalog = self.catalog.snapshot();
        catalog
            .recipes
            .iter()
            .filter(|recipe| {
                any_translation_contains(&recipe.name, &needle)
                    || uses_matching_ingredient(&catalog, recipe, &needle)
            })
            .cloned()
            .collect()
    }
}

fn uses_matching_ingredient(catalog: &Catalog, recipe: &Recipe, needle: &str) -> bool {
    recipe.ingredients.iter().any(|entry| {
        catalog
            .ingredient(&entry.ingredient_id)
            .is_some_and(|ingredient| any_translation_contains(&ingredient.translations, needle))
    })
}
