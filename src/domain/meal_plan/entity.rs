use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::recipe::Recipe;
use crate::domain::{DomainError, DomainResult};

/// Recipes a daily plan may hold
pub const DAILY_PLAN_CAPACITY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Daily,
    Weekly,
}

/// An ordered schedule of recipe snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub plan_type: PlanType,
    pub recipes: Vec<Recipe>,
}

impl PlanType {
    /// `None` means uncapped
    pub fn capacity(&self) -> Option<usize> {
        match self {
            PlanType::Daily => Some(DAILY_PLAN_CAPACITY),
            PlanType::Weekly => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Daily => "daily",
            PlanType::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(PlanType::Daily),
            "weekly" => Ok(PlanType::Weekly),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown plan type '{}'",
                other
            ))),
        }
    }
}

impl MealPlan {
    pub fn empty(plan_type: PlanType) -> Self {
        Self {
            plan_type,
            recipes: Vec::new(),
        }
    }

    pub fn with_recipes(plan_type: PlanType, recipes: Vec<Recipe>) -> Self {
        Self { plan_type, recipes }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.plan_type
            .capacity()
            .is_some_and(|capacity| self.recipes.len() >= capacity)
    }

    /// Appends a snapshot of `recipe`.
    ///
    /// A full plan rejects the add; it is never truncated. Repeated recipes are
    /// appended like any other.
    pub fn add_recipe(&self, recipe: &Recipe) -> DomainResult<MealPlan> {
        if let Some(capacity) = self.plan_type.capacity() {
            if self.recipes.len() >= capacity {
                return Err(DomainError::CapacityExceeded {
                    plan: self.plan_type.to_string(),
                    capacity,
                });
            }
        }
        let mut recipes = self.recipes.clone();
        recipes.push(recipe.clone());
        Ok(MealPlan::with_recipes(self.plan_type, recipes))
    }

    /// Removes the first entry with `recipe_id`; no-op when absent
    pub fn remove_recipe(&self, recipe_id: &str) -> MealPlan {
        let mut recipes = self.recipes.clone();
        if let Some(pos) = recipes.iter().position(|r| r.id == recipe_id) {
            recipes.remove(pos);
        }
        MealPlan::with_recipes(self.plan_type, recipes)
    }

    pub fn contains(&self, recipe_id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == recipe_id)
    }
}
