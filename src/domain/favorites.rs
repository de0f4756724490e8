//! Favorites: recipe snapshots unique by id.
//!
//! Each entry is a full copy of the recipe at favoriting time, not a reference
//! into the catalog.

use serde::{Deserialize, Serialize};

use crate::domain::recipe::Recipe;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut favorites = Self::default();
        for recipe in recipes {
            if !favorites.is_favorite(&recipe.id) {
                favorites.recipes.push(recipe);
            }
        }
        favorites
    }

    /// Removes the recipe when present by id, otherwise appends a snapshot.
    pub fn toggled(&self, recipe: &Recipe) -> Favorites {
        let mut recipes = self.recipes.clone();
        if self.is_favorite(&recipe.id) {
            recipes.retain(|fav| fav.id != recipe.id);
        } else {
            recipes.push(recipe.clone());
        }
        Favorites { recipes }
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.recipes.iter().any(|fav| fav.id == recipe_id)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}
