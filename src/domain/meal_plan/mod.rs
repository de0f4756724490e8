pub mod entity;
pub mod invariants;

pub use entity::{MealPlan, PlanType, DAILY_PLAN_CAPACITY};
pub use invariants::validate_meal_plan;
