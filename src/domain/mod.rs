// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All business rules live here as pure functions and value types.
// Nothing in this module touches storage or the network.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod favorites;
pub mod filters;
pub mod ingredient;
pub mod locale;
pub mod matching;
pub mod meal_plan;
pub mod recipe;
pub mod selection;
pub mod session;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalog
pub use catalog::{
    Catalog, CatalogOrigin, CountriesDocument, Country, IngredientsDocument, RecipesDocument,
};

// Ingredient Domain
pub use ingredient::{validate_ingredient, Ingredient};

// Recipe Domain
pub use recipe::{
    validate_draft, validate_recipe, Difficulty, Recipe, RecipeDraft, RecipeIngredient,
    RecipeTime,
};

// Matching (derived data)
pub use filters::{FilterCatalog, PartitionedFilters};
pub use matching::find_matching;
pub use selection::SelectionState;

// Collections
pub use favorites::Favorites;
pub use meal_plan::{validate_meal_plan, MealPlan, PlanType, DAILY_PLAN_CAPACITY};

// Session
pub use locale::{localized, LocalizedText, DEFAULT_LOCALE};
pub use session::{validate_language, Session, Theme};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("The {plan} plan is full ({capacity} recipes max)")]
    CapacityExceeded { plan: String, capacity: usize },

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
