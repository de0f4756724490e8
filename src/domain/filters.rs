//! Filter catalog: the selectable tag, difficulty and country values.
//!
//! Derived from the recipe catalog, never stored. A recipe without a country or
//! difficulty contributes nothing to that category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::recipe::Recipe;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCatalog {
    pub tags: BTreeSet<String>,
    pub difficulties: BTreeSet<String>,
    pub countries: BTreeSet<String>,
}

/// Selected filter values split by the category they belong to.
///
/// A value known to several categories appears in each of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedFilters<'a> {
    pub tags: Vec<&'a str>,
    pub difficulties: Vec<&'a str>,
    pub countries: Vec<&'a str>,
}

impl FilterCatalog {
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut catalog = Self::default();
        for recipe in recipes {
            catalog.tags.extend(recipe.tags.iter().cloned());
            if let Some(difficulty) = recipe.difficulty {
                catalog.difficulties.insert(difficulty.as_str().to_string());
            }
            if let Some(country) = recipe.country_en() {
                catalog.countries.insert(country.to_string());
            }
        }
        catalog
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.difficulties.is_empty() && self.countries.is_empty()
    }

    /// Whether `value` is selectable in any category
    pub fn contains(&self, value: &str) -> bool {
        self.tags.contains(value) || self.difficulties.contains(value) || self.countries.contains(value)
    }

    pub fn partition<'a, I>(&self, selected: I) -> PartitionedFilters<'a>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut parts = PartitionedFilters::default();
        for value in selected {
            if self.tags.contains(value) {
                parts.tags.push(value);
            }
            if self.difficulties.contains(value) {
                parts.difficulties.push(value);
            }
            if self.countries.contains(value) {
                parts.countries.push(value);
            }
        }
        parts
    }
}
