// src/main.rs
//
// recipehub CLI. Every command prints one JSON document on stdout; failures
// print a serialized `ErrorResponse` and exit with status 1.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use recipehub::application::commands::*;
use recipehub::application::dto::CreateRecipeDto;
use recipehub::application::state::AppState;
use recipehub::config::Settings;
use recipehub::observability::init_logging;

/// recipehub - find recipes by what is in the fridge
#[derive(Parser)]
#[command(name = "recipehub", version)]
#[command(about = "Local-first recipe finder, favorites and meal planner", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, env = "RECIPEHUB_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or refresh the recipe catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the selected ingredients
    Ingredients {
        #[command(subcommand)]
        action: IngredientsAction,
    },
    /// List the selectable tag, difficulty and country filters
    Filters,
    /// Find recipes using the selected ingredients and the given filters
    Find {
        /// Tag, difficulty or country; repeat for several
        #[arg(long = "filter")]
        filters: Vec<String>,
    },
    /// Search recipes by recipe or ingredient name
    Search { query: String },
    /// Favorite recipes
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Daily and weekly meal plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Recipes you wrote yourself
    Recipes {
        #[command(subcommand)]
        action: RecipesAction,
    },
    /// Sign in
    Login {
        username: String,
        #[arg(long, env = "RECIPEHUB_PASSWORD")]
        password: String,
    },
    /// Create an account and sign in
    Register {
        email: String,
        #[arg(long, env = "RECIPEHUB_PASSWORD")]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Sign out
    Logout,
    /// Language and theme
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Download the latest catalog
    Refresh,
    /// Show where the current catalog came from
    Show,
}

#[derive(Subcommand)]
enum IngredientsAction {
    /// Ingredients whose name contains TEXT
    Suggest { text: String },
    Select { ingredient_id: String },
    Unselect { ingredient_id: String },
    Clear,
    Selected,
}

#[derive(Subcommand)]
enum FavoritesAction {
    List,
    /// Add the recipe to favorites, or remove it if already there
    Toggle { recipe_id: String },
}

#[derive(Subcommand)]
enum PlanAction {
    List {
        /// daily or weekly
        plan_type: String,
    },
    Add {
        plan_type: String,
        recipe_id: String,
    },
    Remove {
        plan_type: String,
        recipe_id: String,
    },
}

#[derive(Subcommand)]
enum RecipesAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        description: String,
        /// easy, medium or hard (default easy)
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long, default_value = "")]
        preparation_time: String,
        #[arg(long, default_value = "")]
        cooking_time: String,
        /// `id` or `id=quantity`; repeat for several
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
    Delete {
        recipe_id: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    /// Set the display language, e.g. en or el
    Language { code: String },
    /// Set the theme, or toggle it when no value is given
    Theme { value: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.clone())?;
    settings.validate().map_err(|e| anyhow::anyhow!(e))?;

    init_logging(&settings.observability.log_level)?;

    let state = AppState::from_settings(&settings)?;

    match dispatch(cli.command, &state).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(error_json) => {
            println!("{}", error_json);
            std::process::exit(1);
        }
    }
}

async fn dispatch(command: Commands, state: &AppState) -> Result<Value, String> {
    match command {
        Commands::Catalog { action } => match action {
            CatalogAction::Refresh => json(refresh_catalog(state).await),
            CatalogAction::Show => json(catalog_status(state).await),
        },
        Commands::Ingredients { action } => match action {
            IngredientsAction::Suggest { text } => json(suggest_ingredients(text, state).await),
            IngredientsAction::Select { ingredient_id } => {
                json(select_ingredient(ingredient_id, state).await)
            }
            IngredientsAction::Unselect { ingredient_id } => {
                json(unselect_ingredient(ingredient_id, state).await)
            }
            IngredientsAction::Clear => json(clear_ingredients(state).await),
            IngredientsAction::Selected => json(selected_ingredients(state).await),
        },
        Commands::Filters => json(list_filters(state).await),
        Commands::Find { filters } => json(find_recipes(filters, state).await),
        Commands::Search { query } => json(search_recipes(query, state).await),
        Commands::Favorites { action } => match action {
            FavoritesAction::List => json(list_favorites(state).await),
            FavoritesAction::Toggle { recipe_id } => json(toggle_favorite(recipe_id, state).await),
        },
        Commands::Plan { action } => match action {
            PlanAction::List { plan_type } => json(get_meal_plan(plan_type, state).await),
            PlanAction::Add {
                plan_type,
                recipe_id,
            } => json(add_to_meal_plan(plan_type, recipe_id, state).await),
            PlanAction::Remove {
                plan_type,
                recipe_id,
            } => json(remove_from_meal_plan(plan_type, recipe_id, state).await),
        },
        Commands::Recipes { action } => match action {
            RecipesAction::List => json(list_user_recipes(state).await),
            RecipesAction::Create {
                name,
                country,
                description,
                difficulty,
                preparation_time,
                cooking_time,
                ingredients,
            } => {
                let dto = CreateRecipeDto {
                    name,
                    country,
                    description,
                    difficulty,
                    preparation_time,
                    cooking_time,
                    ingredients,
                };
                json(create_user_recipe(dto, state).await)
            }
            RecipesAction::Delete { recipe_id } => json(delete_user_recipe(recipe_id, state).await),
        },
        Commands::Login { username, password } => json(login(username, password, state).await),
        Commands::Register {
            email,
            password,
            confirm_password,
        } => json(register(email, password, confirm_password, state).await),
        Commands::Logout => json(logout(state).await),
        Commands::Settings { action } => match action {
            SettingsAction::Show => json(get_session(state).await),
            SettingsAction::Language { code } => json(set_language(code, state).await),
            SettingsAction::Theme { value } => json(set_theme(value, state).await),
        },
    }
}

fn json<T: Serialize>(result: Result<T, String>) -> Result<Value, String> {
    result.and_then(|value| serde_json::to_value(value).map_err(|e| e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_find_accepts_repeated_filters() {
        let cli = Cli::parse_from(["recipehub", "find", "--filter", "easy", "--filter", "Greece"]);
        match cli.command {
            Commands::Find { filters } => assert_eq!(filters, vec!["easy", "Greece"]),
            _ => panic!("expected find"),
        }
    }

    #[test]
    fn test_theme_value_is_optional() {
        let cli = Cli::parse_from(["recipehub", "settings", "theme"]);
        assert!(matches!(
            cli.command,
            Commands::Settings {
                action: SettingsAction::Theme { value: None }
            }
        ));
    }
}
