// src/application/commands/finder_commands.rs
//
// Ingredient selection, matching and search
//
// RULES:
// - Accept plain arguments
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::dto::{IngredientDto, RecipeDto, SelectionDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::{Ingredient, Recipe};

pub async fn suggest_ingredients(
    text: String,
    state: &AppState,
) -> Result<Vec<IngredientDto>, String> {
    let session = state.settings_service.current_session();
    let suggestions = state.finder_service.suggest_ingredients(&text);
    Ok(ingredient_dtos(&suggestions, &session.language))
}

pub async fn select_ingredient(
    ingredient_id: String,
    state: &AppState,
) -> Result<SelectionDto, String> {
    state
        .finder_service
        .add_ingredient(&ingredient_id)
        .to_error_response()?;
    selected_ingredients(state).await
}

pub async fn unselect_ingredient(
    ingredient_id: String,
    state: &AppState,
) -> Result<SelectionDto, String> {
    state
        .finder_service
        .remove_ingredient(&ingredient_id)
        .to_error_response()?;
    selected_ingredients(state).await
}

pub async fn clear_ingredients(state: &AppState) -> Result<SelectionDto, String> {
    state
        .finder_service
        .clear_ingredients()
        .to_error_response()?;
    selected_ingredients(state).await
}

pub async fn selected_ingredients(state: &AppState) -> Result<SelectionDto, String> {
    let session = state.settings_service.current_session();
    Ok(SelectionDto {
        ingredients: ingredient_dtos(
            &state.finder_service.selected_ingredients(),
            &session.language,
        ),
        filters: state.finder_service.selected_filters(),
    })
}

/// Match the selected ingredients plus `filters` against the catalog
pub async fn find_recipes(filters: Vec<String>, state: &AppState) -> Result<Vec<RecipeDto>, String> {
    state.finder_service.clear_filters();
    for filter in &filters {
        state.finder_service.toggle_filter(filter);
    }

    let recipes = state.finder_service.find_recipes();
    Ok(recipe_dtos(&recipes, state))
}

pub async fn search_recipes(query: String, state: &AppState) -> Result<Vec<RecipeDto>, String> {
    let recipes = state.search_service.search(&query);
    Ok(recipe_dtos(&recipes, state))
}

fn ingredient_dtos(ingredients: &[Ingredient], language: &str) -> Vec<IngredientDto> {
    ingredients
        .iter()
        .map(|i| IngredientDto::localized(i, language))
        .collect()
}

pub(crate) fn recipe_dtos(recipes: &[Recipe], state: &AppState) -> Vec<RecipeDto> {
    let session = state.settings_service.current_session();
    let catalog = state.catalog_service.snapshot();
    recipes
        .iter()
        .map(|r| {
            let is_favorite = state.favorites_service.is_favorite(&r.id);
            RecipeDto::localized(r, &catalog, &session.language, is_favorite)
        })
        .collect()
}
