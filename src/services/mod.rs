// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services hold the in-memory snapshot of one concern, apply domain rules,
// persist the whole value and only then swap the snapshot.

pub mod auth_service;
pub mod bundled_catalog;
pub mod catalog_service;
pub mod favorites_service;
pub mod finder_service;
pub mod meal_plan_service;
pub mod search_service;
pub mod settings_service;
pub mod user_recipe_service;

#[cfg(test)]
mod test_support;



#[cfg(test)]
mod finder_service_tests;

#[cfg(test)]
mod session_service_tests;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use favorites_service::FavoritesService;
pub use finder_service::FinderService;
pub use meal_plan_service::MealPlanService;
pub use search_service::SearchService;
pub use settings_service::SettingsService;
pub use user_recipe_service::UserRecipeService;
