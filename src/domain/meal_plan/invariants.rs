use super::entity::MealPlan;
use crate::domain::{DomainError, DomainResult};

/// Validates all MealPlan invariants
pub fn validate_meal_plan(plan: &MealPlan) -> DomainResult<()> {
    if let Some(capacity) = plan.plan_type.capacity() {
        if plan.recipes.len() > capacity {
            return Err(DomainError::CapacityExceeded {
                plan: plan.plan_type.to_string(),
                capacity,
            });
        }
    }
    Ok(())
}

/// Critical MealPlan Invariants:
///
/// 1. A daily plan holds at most 2 recipes
/// 2. A weekly plan has no cap
/// 3. Adds beyond capacity are rejected, never truncated
/// 4. Entries are snapshots; order is insertion order
/// 5. Daily and weekly plans are independent of each other
