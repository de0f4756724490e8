// src/application/commands/collection_commands.rs
//
// Favorites, meal plans and user recipes

use crate::application::commands::finder_commands::recipe_dtos;
use crate::application::dto::{
    CreateRecipeDto, FavoriteToggleDto, MealPlanDto, MessageDto, RecipeDto,
};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::PlanType;
use crate::error::AppError;

// ============================================================================
// FAVORITES
// ============================================================================

pub async fn list_favorites(state: &AppState) -> Result<Vec<RecipeDto>, String> {
    Ok(recipe_dtos(&state.favorites_service.list(), state))
}

pub async fn toggle_favorite(
    recipe_id: String,
    state: &AppState,
) -> Result<FavoriteToggleDto, String> {
    let session = state.settings_service.current_session();
    let recipe = state
        .find_recipe(&recipe_id)
        .ok_or_else(|| ErrorResponse::not_found("Recipe").to_json())?;

    let is_favorite = state
        .favorites_service
        .toggle(&session, &recipe)
        .to_error_response()?;

    Ok(FavoriteToggleDto {
        recipe_id,
        is_favorite,
    })
}

// ============================================================================
// MEAL PLANS
// ============================================================================

pub async fn get_meal_plan(plan_type: String, state: &AppState) -> Result<MealPlanDto, String> {
    let plan_type = parse_plan_type(&plan_type)?;
    let session = state.settings_service.current_session();
    let plan = state.meal_plan_service.plan(plan_type);
    Ok(MealPlanDto::localized(
        &plan,
        &state.catalog_service.snapshot(),
        &session.language,
    ))
}

pub async fn add_to_meal_plan(
    plan_type: String,
    recipe_id: String,
    state: &AppState,
) -> Result<MealPlanDto, String> {
    let plan_type = parse_plan_type(&plan_type)?;
    let session = state.settings_service.current_session();
    let recipe = state
        .find_recipe(&recipe_id)
        .ok_or_else(|| ErrorResponse::not_found("Recipe").to_json())?;

    let plan = state
        .meal_plan_service
        .add_recipe(&session, plan_type, &recipe)
        .to_error_response()?;

    Ok(MealPlanDto::localized(
        &plan,
        &state.catalog_service.snapshot(),
        &session.language,
    ))
}

pub async fn remove_from_meal_plan(
    plan_type: String,
    recipe_id: String,
    state: &AppState,
) -> Result<MealPlanDto, String> {
    let plan_type = parse_plan_type(&plan_type)?;
    let session = state.settings_service.current_session();

    let plan = state
        .meal_plan_service
        .remove_recipe(&session, plan_type, &recipe_id)
        .to_error_response()?;

    Ok(MealPlanDto::localized(
        &plan,
        &state.catalog_service.snapshot(),
        &session.language,
    ))
}

fn parse_plan_type(value: &str) -> Result<PlanType, String> {
    value
        .parse::<PlanType>()
        .map_err(|e| ErrorResponse::validation(e.to_string()).to_json())
}

// ============================================================================
// USER RECIPES
// ============================================================================

pub async fn list_user_recipes(state: &AppState) -> Result<Vec<RecipeDto>, String> {
    Ok(recipe_dtos(&state.user_recipe_service.list(), state))
}

pub async fn create_user_recipe(
    dto: CreateRecipeDto,
    state: &AppState,
) -> Result<RecipeDto, String> {
    let draft = dto
        .into_draft()
        .map_err(|e| ErrorResponse::validation(e).to_json())?;

    let recipe = state
        .user_recipe_service
        .create(draft)
        .to_error_response()?;

    Ok(recipe_dtos(std::slice::from_ref(&recipe), state).remove(0))
}

pub async fn delete_user_recipe(recipe_id: String, state: &AppState) -> Result<MessageDto, String> {
    let deleted = state
        .user_recipe_service
        .delete(&recipe_id)
        .to_error_response()?;

    if !deleted {
        return Err(ErrorResponse::from_app_error(AppError::NotFound).to_json());
    }
    Ok(MessageDto::ok(format!("Deleted recipe {}", recipe_id)))
}
