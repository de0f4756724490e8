// src/repositories/user_recipe_repository.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::Recipe;
use crate::error::AppResult;
use crate::repositories::kv::{read_json, write_json, StorageKey};

pub trait UserRecipeRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Recipe>>;
    fn save_all(&self, recipes: &[Recipe]) -> AppResult<()>;
}

pub struct SqliteUserRecipeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserRecipeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl UserRecipeRepository for SqliteUserRecipeRepository {
    fn list_all(&self) -> AppResult<Vec<Recipe>> {
        let conn = self.pool.get()?;
        let recipes: Option<Vec<Recipe>> = read_json(&conn, StorageKey::UserRecipes)?;
        Ok(recipes.unwrap_or_default())
    }

    fn save_all(&self, recipes: &[Recipe]) -> AppResult<()> {
        let conn = self.pool.get()?;
        write_json(&conn, StorageKey::UserRecipes, recipes)
    }
}
