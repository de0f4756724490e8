// src/application/state.rs

use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::domain::{PlanType, Recipe};
use crate::error::AppResult;
use crate::integrations::{AuthGateway, HttpAuthClient, HttpCatalogClient, RemoteCatalog};
use crate::repositories::{
    SqliteCatalogRepository, SqliteFavoritesRepository, SqliteMealPlanRepository,
    SqliteSelectionRepository, SqliteSettingsRepository, SqliteUserRecipeRepository,
};
use crate::services::{
    AuthService, CatalogService, FavoritesService, FinderService, MealPlanService, SearchService,
    SettingsService, UserRecipeService,
};

/// Application state shared by all commands.
/// All fields are Arc-wrapped; every service has loaded its snapshot.
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub finder_service: Arc<FinderService>,
    pub search_service: Arc<SearchService>,
    pub favorites_service: Arc<FavoritesService>,
    pub meal_plan_service: Arc<MealPlanService>,
    pub user_recipe_service: Arc<UserRecipeService>,
    pub auth_service: Arc<AuthService>,
    pub settings_service: Arc<SettingsService>,
}

impl AppState {
    /// Open the configured database and wire the HTTP clients.
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let db_path = settings.database_path()?;
        info!(path = %db_path.display(), "Opening database");

        let pool = Arc::new(create_connection_pool(&db_path)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }

        let remote = HttpCatalogClient::new(settings.catalog_sources(), settings.request_timeout())?;
        let gateway =
            HttpAuthClient::new(settings.remote.auth_base_url.clone(), settings.request_timeout())?;

        Ok(Self::new(pool, Arc::new(remote), Arc::new(gateway)))
    }

    /// Build every service over `pool` and load its persisted state.
    pub fn new(
        pool: Arc<ConnectionPool>,
        remote: Arc<dyn RemoteCatalog>,
        gateway: Arc<dyn AuthGateway>,
    ) -> Self {
        let settings_repo = Arc::new(SqliteSettingsRepository::new(pool.clone()));

        let catalog_service = Arc::new(CatalogService::new(
            Arc::new(SqliteCatalogRepository::new(pool.clone())),
            remote,
        ));
        let finder_service = Arc::new(FinderService::new(
            catalog_service.clone(),
            Arc::new(SqliteSelectionRepository::new(pool.clone())),
        ));
        let search_service = Arc::new(SearchService::new(catalog_service.clone()));
        let favorites_service = Arc::new(FavoritesService::new(Arc::new(
            SqliteFavoritesRepository::new(pool.clone()),
        )));
        let meal_plan_service = Arc::new(MealPlanService::new(Arc::new(
            SqliteMealPlanRepository::new(pool.clone()),
        )));
        let user_recipe_service = Arc::new(UserRecipeService::new(Arc::new(
            SqliteUserRecipeRepository::new(pool),
        )));
        let auth_service = Arc::new(AuthService::new(gateway, settings_repo.clone()));
        let settings_service = Arc::new(SettingsService::new(settings_repo));

        catalog_service.load();
        finder_service.load();
        favorites_service.load();
        meal_plan_service.load(PlanType::Daily);
        meal_plan_service.load(PlanType::Weekly);
        user_recipe_service.load();

        Self {
            catalog_service,
            finder_service,
            search_service,
            favorites_service,
            meal_plan_service,
            user_recipe_service,
            auth_service,
            settings_service,
        }
    }

    /// Find a recipe by id in the catalog, then user recipes, then stored
    /// favorites and plans (which may outlive the catalog entry).
    pub fn find_recipe(&self, recipe_id: &str) -> Option<Recipe> {
        if let Some(recipe) = self.catalog_service.snapshot().recipe(recipe_id) {
            return Some(recipe.clone());
        }
        if let Some(recipe) = self.user_recipe_service.get(recipe_id) {
            return Some(recipe);
        }
        if let Some(recipe) = self
            .favorites_service
            .list()
            .into_iter()
            .find(|r| r.id == recipe_id)
        {
            return Some(recipe);
        }
        [PlanType::Daily, PlanType::Weekly]
            .into_iter()
            .flat_map(|plan_type| self.meal_plan_service.plan(plan_type).recipes)
            .find(|r| r.id == recipe_id)
    }
}
