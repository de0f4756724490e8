pub mod draft;
pub mod entity;
pub mod invariants;

pub use draft::{validate_draft, RecipeDraft};
pub use entity::{Difficulty, Recipe, RecipeIngredient, RecipeTime};
pub use invariants::validate_recipe;
