//! The user's in-progress choice of ingredients and filters.
//!
//! Both lists behave as ordered sets: insertion order is kept for display and
//! adding an existing value changes nothing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub ingredient_ids: Vec<String>,
    pub filters: Vec<String>,
}

impl SelectionState {
    pub fn with_ingredients(ingredient_ids: Vec<String>) -> Self {
        let mut state = Self::default();
        for id in ingredient_ids {
            state.add_ingredient(id);
        }
        state
    }

    /// Returns `false` when the id was already selected
    pub fn add_ingredient(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.is_ingredient_selected(&id) {
            return false;
        }
        self.ingredient_ids.push(id);
        true
    }

    /// Returns `false` when the id was not selected
    pub fn remove_ingredient(&mut self, id: &str) -> bool {
        let before = self.ingredient_ids.len();
        self.ingredient_ids.retain(|selected| selected != id);
        self.ingredient_ids.len() != before
    }

    pub fn clear_ingredients(&mut self) {
        self.ingredient_ids.clear();
    }

    pub fn is_ingredient_selected(&self, id: &str) -> bool {
        self.ingredient_ids.iter().any(|selected| selected == id)
    }

    /// Adds the filter, or removes it when already selected.
    /// Returns whether the filter is selected afterwards.
    pub fn toggle_filter(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if let Some(pos) = self.filters.iter().position(|f| *f == value) {
            self.filters.remove(pos);
            false
        } else {
            self.filters.push(value);
            true
        }
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }
}
