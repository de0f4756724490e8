// src/services/finder_service.rs
//
// Ingredient/filter selection and recipe matching over the current catalog.
//
// Selected ingredient ids are persisted on every change; filter selections
// live only as long as the service.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::domain::locale::any_translation_contains;
use crate::domain::{find_matching, FilterCatalog, Ingredient, Recipe, SelectionState};
use crate::error::{AppError, AppResult};
use crate::repositories::SelectionRepository;
use crate::services::CatalogService;

pub struct FinderService {
    catalog: Arc<CatalogService>,
    selection_repo: Arc<dyn SelectionRepository>,
    selection: RwLock<SelectionState>,
}

impl FinderService {
    pub fn new(catalog: Arc<CatalogService>, selection_repo: Arc<dyn SelectionRepository>) -> Self {
        Self {
            catalog,
            selection_repo,
            selection: RwLock::new(SelectionState::default()),
        }
    }

    /// Restore the persisted ingredient selection.
    pub fn load(&self) -> SelectionState {
        let ids = match self.selection_repo.load_ingredient_ids() {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Selected ingredients unreadable, starting empty");
                Vec::new()
            }
        };

        let mut selection = self.selection.write().unwrap_or_else(PoisonError::into_inner);
        let filters = std::mem::take(&mut selection.filters);
        *selection = SelectionState::with_ingredients(ids);
        selection.filters = filters;
        selection.clone()
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Selected ingredients resolved against the catalog, in selection order.
    /// Ids no longer in the catalog are skipped.
    pub fn selected_ingredients(&self) -> Vec<Ingredient> {
        let catalog = self.catalog.snapshot();
        self.selection()
            .ingredient_ids
            .iter()
            .filter_map(|id| catalog.ingredient(id).cloned())
            .collect()
    }

    /// Catalog ingredients whose name in any language contains `text`,
    /// excluding ones already selected.
    pub fn suggest_ingredients(&self, text: &str) -> Vec<Ingredient> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let selection = self.selection();
        self.catalog
            .snapshot()
            .ingredients
            .into_iter()
            .filter(|ingredient| !selection.is_ingredient_selected(&ingredient.id))
            .filter(|ingredient| any_translation_contains(&ingredient.translations, &needle))
            .collect()
    }

    pub fn add_ingredient(&self, ingredient_id: &str) -> AppResult<SelectionState> {
        if self.catalog.snapshot().ingredient(ingredient_id).is_none() {
            return Err(AppError::Validation(format!(
                "Unknown ingredient '{}'",
                ingredient_id
            )));
        }

        self.update_ingredients(|selection| selection.add_ingredient(ingredient_id))
    }

    pub fn remove_ingredient(&self, ingredient_id: &str) -> AppResult<SelectionState> {
        self.update_ingredients(|selection| selection.remove_ingredient(ingredient_id))
    }

    pub fn clear_ingredients(&self) -> AppResult<SelectionState> {
        self.update_ingredients(|selection| {
            let changed = !selection.ingredient_ids.is_empty();
            selection.clear_ingredients();
            changed
        })
    }

    /// Returns whether the filter is selected afterwards
    pub fn toggle_filter(&self, value: &str) -> bool {
        let mut selection = self.selection.write().unwrap_or_else(PoisonError::into_inner);
        let selected = selection.toggle_filter(value);
        debug!(filter = value, selected, "Filter toggled");
        selected
    }

    pub fn selected_filters(&self) -> Vec<String> {
        self.selection().filters
    }

    pub fn clear_filters(&self) {
        self.selection
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear_filters();
    }

    pub fn filter_catalog(&self) -> FilterCatalog {
        self.catalog.filter_catalog()
    }

    /// Recipes matching the current ingredient and filter selection
    pub fn find_recipes(&self) -> Vec<Recipe> {
        let catalog = self.catalog.snapshot();
        let filters = FilterCatalog::from_recipes(&catalog.recipes);
        let selection = self.selection();

        let matches: Vec<Recipe> = find_matching(
            &catalog.recipes,
            &selection.ingredient_ids,
            &selection.filters,
            &filters,
        )
        .into_iter()
        .cloned()
        .collect();

        info!(
            ingredients = selection.ingredient_ids.len(),
            filters = selection.filters.len(),
            matches = matches.len(),
            "Recipe search complete"
        );
        matches
    }

    /// Apply `change` to a copy of the selection; persist and swap only when it
    /// reports a change.
    fn update_ingredients<F>(&self, change: F) -> AppResult<SelectionState>
    where
        F: FnOnce(&mut SelectionState) -> bool,
    {
        let mut current = self.selection.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = current.clone();
        if !change(&mut next) {
            return Ok(next);
        }

        self.selection_repo.save_ingredient_ids(&next.ingredient_ids)?;
        *current = next.clone();
        Ok(next)
    }
}
