// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and Services
// - Commands return DTOs
// - Errors leave as serialized `ErrorResponse` JSON
// - The session is read fresh at the start of every command
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod collection_commands;
pub mod finder_commands;
pub mod session_commands;


pub use catalog_commands::*;
pub use collection_commands::*;
pub use finder_commands::{
    clear_ingredients, find_recipes, search_recipes, select_ingredient, selected_ingredients,
    suggest_ingredients, unselect_ingredient,
};
pub use session_commands::*;
