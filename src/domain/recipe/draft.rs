use serde::{Deserialize, Serialize};

use super::entity::{Difficulty, Recipe, RecipeIngredient, RecipeTime};
use crate::domain::locale::english;
use crate::domain::{DomainError, DomainResult};

/// A user-authored recipe before it gets an id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub name: String,
    pub country: String,
    pub description: String,
    pub difficulty: Option<Difficulty>,
    pub preparation_time: String,
    pub cooking_time: String,
    /// Ingredient ids with optional quantities; missing quantity means "1"
    pub ingredients: Vec<(String, Option<String>)>,
}

/// All text fields are required and at least one ingredient is selected
pub fn validate_draft(draft: &RecipeDraft) -> DomainResult<()> {
    let missing = [
        ("name", &draft.name),
        ("country", &draft.country),
        ("description", &draft.description),
    ]
    .into_iter()
    .find(|(_, value)| value.trim().is_empty());

    if let Some((field, _)) = missing {
        return Err(DomainError::InvariantViolation(format!(
            "Recipe {} cannot be empty",
            field
        )));
    }
    if draft.ingredients.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Select at least one ingredient".to_string(),
        ));
    }
    Ok(())
}

impl RecipeDraft {
    /// Materialize as a user recipe; text fields are stored under "en"
    pub fn into_recipe(self, id: String) -> Recipe {
        let mut recipe = Recipe::new(id, english(self.name.trim()));
        recipe.country = Some(english(self.country.trim()));
        recipe.description = Some(english(self.description.trim()));
        recipe.difficulty = Some(self.difficulty.unwrap_or(Difficulty::Easy));
        recipe.time = Some(RecipeTime {
            preparation: self.preparation_time,
            cooking: self.cooking_time,
        });
        recipe.ingredients = self
            .ingredients
            .into_iter()
            .map(|(id, quantity)| {
                RecipeIngredient::new(id, quantity.unwrap_or_else(|| "1".to_string()))
            })
            .collect();
        recipe.is_user_recipe = true;
        recipe
    }
}
