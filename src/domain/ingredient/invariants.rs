use super::entity::Ingredient;
use crate::domain::locale::DEFAULT_LOCALE;
use crate::domain::{DomainError, DomainResult};

/// Validates all Ingredient invariants
pub fn validate_ingredient(ingredient: &Ingredient) -> DomainResult<()> {
    if ingredient.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Ingredient id cannot be empty".to_string(),
        ));
    }
    validate_translations(ingredient)?;
    Ok(())
}

/// Locale keys are non-empty and an English name exists
fn validate_translations(ingredient: &Ingredient) -> DomainResult<()> {
    if ingredient.translations.keys().any(|locale| locale.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Ingredient '{}' has an empty locale key",
            ingredient.id
        )));
    }
    if !ingredient.translations.contains_key(DEFAULT_LOCALE) {
        return Err(DomainError::InvariantViolation(format!(
            "Ingredient '{}' has no '{}' translation",
            ingredient.id, DEFAULT_LOCALE
        )));
    }
    Ok(())
}
