use super::entity::Recipe;
use crate::domain::{DomainError, DomainResult};

/// Validates all Recipe invariants
pub fn validate_recipe(recipe: &Recipe) -> DomainResult<()> {
    if recipe.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Recipe id cannot be empty".to_string(),
        ));
    }
    if recipe.name.values().all(|name| name.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Recipe '{}' has no name",
            recipe.id
        )));
    }
    validate_ingredient_lines(recipe)?;
    Ok(())
}

fn validate_ingredient_lines(recipe: &Recipe) -> DomainResult<()> {
    if recipe
        .ingredients
        .iter()
        .any(|line| line.ingredient_id.trim().is_empty())
    {
        return Err(DomainError::InvariantViolation(format!(
            "Recipe '{}' references an ingredient without id",
            recipe.id
        )));
    }
    Ok(())
}

/// Invariants that must hold true for Recipe domain:
///
/// 1. Identity is `id`, never empty
/// 2. At least one non-blank localized name
/// 3. Every ingredient line references an ingredient id
/// 4. Missing country/difficulty is allowed (never a placeholder value)

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::{english, LocalizedText};
    use crate::domain::recipe::RecipeIngredient;

    #[test]
    fn test_valid_recipe() {
        let recipe = Recipe::new("r1", english("Soup"));
        assert!(validate_recipe(&recipe).is_ok());
    }

    #[test]
    fn test_nameless_recipe_fails() {
        let recipe = Recipe::new("r1", LocalizedText::new());
        assert!(validate_recipe(&recipe).is_err());
    }

    #[test]
    fn test_blank_ingredient_reference_fails() {
        let mut recipe = Recipe::new("r1", english("Soup"));
        recipe.ingredients.push(RecipeIngredient::new("", "1"));
        assert!(validate_recipe(&recipe).is_err());
    }
}
