// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - One well-known key per persisted entity

pub mod catalog_repository;
pub mod favorites_repository;
pub mod kv;
pub mod meal_plan_repository;
pub mod selection_repository;
pub mod settings_repository;
pub mod user_recipe_repository;

pub use catalog_repository::{CatalogDocuments, CatalogRepository, SqliteCatalogRepository};
pub use favorites_repository::{FavoritesRepository, SqliteFavoritesRepository};
pub use kv::StorageKey;
pub use meal_plan_repository::{MealPlanRepository, SqliteMealPlanRepository};
pub use selection_repository::{SelectionRepository, SqliteSelectionRepository};
pub use settings_repository::{SettingsRepository, SqliteSettingsRepository};
pub use user_recipe_repository::{SqliteUserRecipeRepository, UserRecipeRepository};
