// src/repositories/meal_plan_repository.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{MealPlan, PlanType, Recipe};
use crate::error::AppResult;
use crate::repositories::kv::{read_json, write_json, StorageKey};

pub trait MealPlanRepository: Send + Sync {
    fn load(&self, plan_type: PlanType) -> AppResult<Option<MealPlan>>;
    fn save(&self, plan: &MealPlan) -> AppResult<()>;
}

pub struct SqliteMealPlanRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMealPlanRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn key_for(plan_type: PlanType) -> StorageKey {
        match plan_type {
            PlanType::Daily => StorageKey::DailyPlan,
            PlanType::Weekly => StorageKey::WeeklyPlan,
        }
    }
}

impl MealPlanRepository for SqliteMealPlanRepository {
    fn load(&self, plan_type: PlanType) -> AppResult<Option<MealPlan>> {
        let conn = self.pool.get()?;
        let recipes: Option<Vec<Recipe>> = read_json(&conn, Self::key_for(plan_type))?;
        Ok(recipes.map(|recipes| MealPlan::with_recipes(plan_type, recipes)))
    }

    // Only the recipe list is stored; the key carries the plan type.
    fn save(&self, plan: &MealPlan) -> AppResult<()> {
        let conn = self.pool.get()?;
        write_json(&conn, Self::key_for(plan.plan_type), &plan.recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_in_memory_pool, initialize_database};
    use crate::domain::locale::english;

    fn repo() -> SqliteMealPlanRepository {
        let pool = Arc::new(create_in_memory_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();
        SqliteMealPlanRepository::new(pool)
    }

    #[test]
    fn test_plans_are_stored_separately() {
        let repo = repo();
        let daily = MealPlan::with_recipes(
            PlanType::Daily,
            vec![Recipe::new("r1", english("Pastitsio"))],
        );

        repo.save(&daily).unwrap();

        assert_eq!(repo.load(PlanType::Daily).unwrap(), Some(daily));
        assert!(repo.load(PlanType::Weekly).unwrap().is_none());
    }

    #[test]
    fn test_weekly_plan_keeps_duplicates_in_order() {
        let repo = repo();
        let r1 = Recipe::new("r1", english("Soup"));
        let r2 = Recipe::new("r2", english("Stew"));
        let weekly = MealPlan::with_recipes(PlanType::Weekly, vec![r1.clone(), r2, r1]);

        repo.save(&weekly).unwrap();

        let ids: Vec<String> = repo
            .load(PlanType::Weekly)
            .unwrap()
            .unwrap()
            .recipes
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["r1", "r2", "r1"]);
    }
}
