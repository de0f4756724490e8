// src/services/meal_plan_service.rs

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use crate::domain::{validate_meal_plan, MealPlan, PlanType, Recipe, Session};
use crate::error::{AppError, AppResult};
use crate::repositories::MealPlanRepository;

pub struct MealPlanService {
    plan_repo: Arc<dyn MealPlanRepository>,
    daily: RwLock<MealPlan>,
    weekly: RwLock<MealPlan>,
}

impl MealPlanService {
    pub fn new(plan_repo: Arc<dyn MealPlanRepository>) -> Self {
        Self {
            plan_repo,
            daily: RwLock::new(MealPlan::empty(PlanType::Daily)),
            weekly: RwLock::new(MealPlan::empty(PlanType::Weekly)),
        }
    }

    /// Read the stored plan; nothing stored (or nothing readable) is an empty plan.
    pub fn load(&self, plan_type: PlanType) -> MealPlan {
        let plan = match self.plan_repo.load(plan_type) {
            Ok(Some(plan)) => match validate_meal_plan(&plan) {
                Ok(()) => plan,
                Err(e) => {
                    warn!(plan = %plan_type, error = %e, "Stored meal plan is invalid, starting empty");
                    MealPlan::empty(plan_type)
                }
            },
            Ok(None) => MealPlan::empty(plan_type),
            Err(e) => {
                warn!(plan = %plan_type, error = %e, "Meal plan unreadable, starting empty");
                MealPlan::empty(plan_type)
            }
        };

        *self.slot(plan_type).write().unwrap_or_else(PoisonError::into_inner) = plan.clone();
        plan
    }

    pub fn plan(&self, plan_type: PlanType) -> MealPlan {
        self.slot(plan_type)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Append `recipe`; a full daily plan fails with `CapacityExceeded`.
    pub fn add_recipe(
        &self,
        session: &Session,
        plan_type: PlanType,
        recipe: &Recipe,
    ) -> AppResult<MealPlan> {
        self.update(session, plan_type, |plan| {
            plan.add_recipe(recipe).map_err(AppError::from_domain)
        })
        .inspect(|plan| {
            info!(plan = %plan_type, recipe_id = %recipe.id, size = plan.len(), "Recipe added to plan")
        })
    }

    pub fn remove_recipe(
        &self,
        session: &Session,
        plan_type: PlanType,
        recipe_id: &str,
    ) -> AppResult<MealPlan> {
        self.update(session, plan_type, |plan| Ok(plan.remove_recipe(recipe_id)))
            .inspect(|plan| {
                info!(plan = %plan_type, recipe_id, size = plan.len(), "Recipe removed from plan")
            })
    }

    /// Check the session, apply `change` to the latest snapshot, persist the
    /// whole plan, then swap the snapshot.
    fn update<F>(&self, session: &Session, plan_type: PlanType, change: F) -> AppResult<MealPlan>
    where
        F: FnOnce(&MealPlan) -> AppResult<MealPlan>,
    {
        if !session.is_authenticated {
            return Err(AppError::AuthenticationRequired);
        }

        let mut current = self.slot(plan_type).write().unwrap_or_else(PoisonError::into_inner);
        let next = change(&*current)?;
        self.plan_repo.save(&next)?;
        *current = next.clone();
        Ok(next)
    }

    fn slot(&self, plan_type: PlanType) -> &RwLock<MealPlan> {
        match plan_type {
            PlanType::Daily => &self.daily,
            PlanType::Weekly => &self.weekly,
        }
    }
}
