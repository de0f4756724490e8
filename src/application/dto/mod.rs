// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations, already localized
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities, except the create-recipe input

use serde::{Deserialize, Serialize};

use crate::domain::{
    Catalog, CatalogOrigin, Country, Difficulty, FilterCatalog, Ingredient, MealPlan, Recipe,
    RecipeDraft, Session,
};

// ============================================================================
// CATALOG DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDto {
    pub id: String,
    pub name: String,
    pub unit: String,
}

impl IngredientDto {
    pub fn localized(ingredient: &Ingredient, language: &str) -> Self {
        Self {
            id: ingredient.id.clone(),
            name: ingredient.display_name(language).to_string(),
            unit: ingredient.unit.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDto {
    pub id: String,
    pub name: String,
}

impl CountryDto {
    pub fn localized(country: &Country, language: &str) -> Self {
        Self {
            id: country.id.clone(),
            name: crate::domain::localized(&country.translations, language)
                .unwrap_or(&country.id)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStatusDto {
    pub origin: CatalogOrigin,
    pub ingredient_count: usize,
    pub recipe_count: usize,
    pub countries: Vec<CountryDto>,
}

impl CatalogStatusDto {
    pub fn localized(catalog: &Catalog, language: &str) -> Self {
        Self {
            origin: catalog.origin,
            ingredient_count: catalog.ingredients.len(),
            recipe_count: catalog.recipes.len(),
            countries: catalog
                .countries
                .iter()
                .map(|c| CountryDto::localized(c, language))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCatalogDto {
    pub tags: Vec<String>,
    pub difficulties: Vec<String>,
    pub countries: Vec<String>,
}

impl From<FilterCatalog> for FilterCatalogDto {
    fn from(filters: FilterCatalog) -> Self {
        Self {
            tags: filters.tags.into_iter().collect(),
            difficulties: filters.difficulties.into_iter().collect(),
            countries: filters.countries.into_iter().collect(),
        }
    }
}

// ============================================================================
// RECIPE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredientDto {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDto {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub difficulty: Option<String>,
    pub tags: Vec<String>,
    pub servings: Option<u32>,
    pub preparation_time: Option<String>,
    pub cooking_time: Option<String>,
    pub description: Option<String>,
    pub ingredients: Vec<RecipeIngredientDto>,
    pub instructions: Vec<String>,
    pub is_user_recipe: bool,
    pub is_favorite: bool,
}

impl RecipeDto {
    /// Ingredient names come from `catalog`; ids it does not know are shown as-is.
    pub fn localized(recipe: &Recipe, catalog: &Catalog, language: &str, is_favorite: bool) -> Self {
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|entry| {
                let known = catalog.ingredient(&entry.ingredient_id);
                RecipeIngredientDto {
                    id: entry.ingredient_id.clone(),
                    name: known
                        .map(|i| i.display_name(language).to_string())
                        .unwrap_or_else(|| entry.ingredient_id.clone()),
                    quantity: entry.quantity.clone(),
                    unit: known.map(|i| i.unit.clone()).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            id: recipe.id.clone(),
            name: recipe.display_name(language).to_string(),
            country: recipe.country_name(language).map(str::to_string),
            difficulty: recipe.difficulty.map(|d| d.to_string()),
            tags: recipe.tags.clone(),
            servings: recipe.servings,
            preparation_time: recipe.time.as_ref().map(|t| t.preparation.clone()),
            cooking_time: recipe.time.as_ref().map(|t| t.cooking.clone()),
            description: recipe
                .description
                .as_ref()
                .and_then(|d| crate::domain::localized(d, language))
                .map(str::to_string),
            ingredients,
            instructions: recipe.instructions_for(language).to_vec(),
            is_user_recipe: recipe.is_user_recipe,
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecipeDto {
    pub name: String,
    pub country: String,
    pub description: String,
    pub difficulty: Option<String>,
    pub preparation_time: String,
    pub cooking_time: String,
    /// `id` or `id=quantity`
    pub ingredients: Vec<String>,
}

impl CreateRecipeDto {
    pub fn into_draft(self) -> Result<RecipeDraft, String> {
        let difficulty = self
            .difficulty
            .as_deref()
            .map(str::parse::<Difficulty>)
            .transpose()
            .map_err(|e| e.to_string())?;

        let ingredients = self
            .ingredients
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((id, quantity)) if !quantity.trim().is_empty() => {
                    (id.trim().to_string(), Some(quantity.trim().to_string()))
                }
                Some((id, _)) => (id.trim().to_string(), None),
                None => (entry.trim().to_string(), None),
            })
            .collect();

        Ok(RecipeDraft {
            name: self.name,
            country: self.country,
            description: self.description,
            difficulty,
            preparation_time: self.preparation_time,
            cooking_time: self.cooking_time,
            ingredients,
        })
    }
}

// ============================================================================
// SELECTION & COLLECTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionDto {
    pub ingredients: Vec<IngredientDto>,
    pub filters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleDto {
    pub recipe_id: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanDto {
    pub plan_type: String,
    pub capacity: Option<usize>,
    pub recipes: Vec<RecipeDto>,
}

impl MealPlanDto {
    pub fn localized(plan: &MealPlan, catalog: &Catalog, language: &str) -> Self {
        Self {
            plan_type: plan.plan_type.to_string(),
            capacity: plan.plan_type.capacity(),
            recipes: plan
                .recipes
                .iter()
                .map(|r| RecipeDto::localized(r, catalog, language, false))
                .collect(),
        }
    }
}

// ============================================================================
// SESSION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDto {
    pub is_authenticated: bool,
    pub language: String,
    pub theme: String,
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            is_authenticated: session.is_authenticated,
            language: session.language,
            theme: session.theme.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::english;
    use crate::domain::{RecipeIngredient, Theme};

    #[test]
    fn test_recipe_dto_resolves_ingredient_names() {
        let mut name = english("Tomato");
        name.insert("el".to_string(), "Ντομάτα".to_string());
        let catalog = Catalog::new(
            vec![Ingredient::new("tomato", name, "pcs")],
            Vec::new(),
            CatalogOrigin::Bundled,
        );
        let mut recipe = Recipe::new("r1", english("Salad"));
        recipe.ingredients = vec![
            RecipeIngredient::new("tomato", "2"),
            RecipeIngredient::new("mystery", "1"),
        ];

        let dto = RecipeDto::localized(&recipe, &catalog, "el", true);

        assert_eq!(dto.name, "Salad");
        assert_eq!(dto.ingredients[0].name, "Ντομάτα");
        assert_eq!(dto.ingredients[0].unit, "pcs");
        assert_eq!(dto.ingredients[1].name, "mystery");
        assert!(dto.is_favorite);
    }

    #[test]
    fn test_create_recipe_dto_parses_quantities() {
        let dto = CreateRecipeDto {
            name: "Toast".to_string(),
            country: "Greece".to_string(),
            description: "Toasted bread".to_string(),
            difficulty: Some("medium".to_string()),
            preparation_time: "1 min".to_string(),
            cooking_time: "3 min".to_string(),
            ingredients: vec!["bread".to_string(), "feta=50".to_string(), "oil=".to_string()],
        };

        let draft = dto.into_draft().unwrap();

        assert_eq!(draft.difficulty, Some(Difficulty::Medium));
        assert_eq!(
            draft.ingredients,
            vec![
                ("bread".to_string(), None),
                ("feta".to_string(), Some("50".to_string())),
                ("oil".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_create_recipe_dto_rejects_unknown_difficulty() {
        let dto = CreateRecipeDto {
            name: "x".to_string(),
            country: "x".to_string(),
            description: "x".to_string(),
            difficulty: Some("extreme".to_string()),
            preparation_time: String::new(),
            cooking_time: String::new(),
            ingredients: vec!["egg".to_string()],
        };
        assert!(dto.into_draft().is_err());
    }

    #[test]
    fn test_session_dto() {
        let dto = SessionDto::from(Session {
            is_authenticated: true,
            language: "el".to_string(),
            theme: Theme::Dark,
        });
        assert_eq!(dto.theme, "dark");
    }
}
