// src/services/user_recipe_service.rs

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{validate_draft, Recipe, RecipeDraft};
use crate::error::{AppError, AppResult};
use crate::repositories::UserRecipeRepository;

/// Recipes authored locally, kept apart from the downloaded catalog
pub struct UserRecipeService {
    recipe_repo: Arc<dyn UserRecipeRepository>,
    recipes: RwLock<Vec<Recipe>>,
}

impl UserRecipeService {
    pub fn new(recipe_repo: Arc<dyn UserRecipeRepository>) -> Self {
        Self {
            recipe_repo,
            recipes: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Vec<Recipe> {
        let recipes = self.recipe_repo.list_all().unwrap_or_else(|e| {
            warn!(error = %e, "User recipes unreadable, starting empty");
            Vec::new()
        });

        *self.recipes.write().unwrap_or_else(PoisonError::into_inner) = recipes.clone();
        recipes
    }

    pub fn list(&self) -> Vec<Recipe> {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, recipe_id: &str) -> Option<Recipe> {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned()
    }

    pub fn create(&self, draft: RecipeDraft) -> AppResult<Recipe> {
        validate_draft(&draft).map_err(|e| AppError::Validation(e.to_string()))?;

        let recipe = draft.into_recipe(Uuid::new_v4().to_string());

        let mut current = self.recipes.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = current.clone();
        next.push(recipe.clone());
        self.recipe_repo.save_all(&next)?;
        *current = next;

        info!(recipe_id = %recipe.id, "User recipe created");
        Ok(recipe)
    }

    /// Returns `false` when no recipe had that id
    pub fn delete(&self, recipe_id: &str) -> AppResult<bool> {
        let mut current = self.recipes.write().unwrap_or_else(PoisonError::into_inner);
        if !current.iter().any(|r| r.id == recipe_id) {
            return Ok(false);
        }

        let next: Vec<Recipe> = current
            .iter()
            .filter(|r| r.id != recipe_id)
            .cloned()
            .collect();
        self.recipe_repo.save_all(&next)?;
        *current = next;

        info!(recipe_id, "User recipe deleted");
        Ok(true)
    }
}
