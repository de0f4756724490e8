//! Catalog documents as they are bundled, downloaded and persisted.
//!
//! Each document wraps its list under a single key, e.g. `{"recipes": [...]}`.

use serde::{Deserialize, Serialize};

use crate::domain::ingredient::{validate_ingredient, Ingredient};
use crate::domain::locale::LocalizedText;
use crate::domain::recipe::{validate_recipe, Recipe};
use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    #[serde(default)]
    pub translations: LocalizedText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientsDocument {
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipesDocument {
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountriesDocument {
    pub countries: Vec<Country>,
}

impl IngredientsDocument {
    pub fn validate(&self) -> DomainResult<()> {
        self.ingredients.iter().try_for_each(validate_ingredient)
    }
}

impl RecipesDocument {
    pub fn validate(&self) -> DomainResult<()> {
        self.recipes.iter().try_for_each(validate_recipe)
    }
}

/// Where the in-memory catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    /// Read back from the local store
    Persisted,
    /// Seeded from the dataset shipped with the binary
    Bundled,
    /// No source produced a usable catalog; lists are empty
    Unavailable,
}

/// The ingredient and recipe catalogs for the current session
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub recipes: Vec<Recipe>,
    pub countries: Vec<Country>,
    pub origin: CatalogOrigin,
}

impl Catalog {
    pub fn new(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>, origin: CatalogOrigin) -> Self {
        Self {
            ingredients,
            recipes,
            countries: Vec::new(),
            origin,
        }
    }

    pub fn unavailable() -> Self {
        Self::new(Vec::new(), Vec::new(), CatalogOrigin::Unavailable)
    }

    pub fn is_available(&self) -> bool {
        self.origin != CatalogOrigin::Unavailable
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::english;

    #[test]
    fn test_documents_parse_wrapped_lists() {
        let doc: IngredientsDocument = serde_json::from_str(
            r#"{"ingredients": [{"id": "tomato", "translations": {"en": "Tomato"}, "unit": "pcs"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.ingredients.len(), 1);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_document_without_wrapper_key_is_rejected() {
        let result: Result<RecipesDocument, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_entry_fails_document_validation() {
        let doc = IngredientsDocument {
            ingredients: vec![Ingredient::new("x", LocalizedText::new(), "")],
        };
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new(
            vec![Ingredient::new("tomato", english("Tomato"), "pcs")],
            vec![Recipe::new("r1", english("Salad"))],
            CatalogOrigin::Bundled,
        );
        assert!(catalog.ingredient("tomato").is_some());
        assert!(catalog.recipe("r2").is_none());
        assert!(catalog.is_available());
        assert!(!Catalog::unavailable().is_available());
    }
}
