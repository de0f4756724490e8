use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::locale::{localized, LocalizedText, DEFAULT_LOCALE};
use crate::domain::DomainError;

/// A recipe from the catalog or authored by the user.
///
/// Catalog recipes are immutable from the matcher's point of view. Favorites and
/// plans store full copies, so a snapshot keeps rendering after the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,

    /// Recipe title per locale
    pub name: LocalizedText,

    /// Country of origin per locale; matching uses the English name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<LocalizedText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,

    /// Ordered steps per locale
    #[serde(default)]
    pub instructions: BTreeMap<String, Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RecipeTime>,

    #[serde(default, rename = "isUserRecipe", skip_serializing_if = "is_false")]
    pub is_user_recipe: bool,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(rename = "id", alias = "ingredientId")]
    pub ingredient_id: String,

    #[serde(default = "default_quantity")]
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeTime {
    #[serde(default)]
    pub preparation: String,
    #[serde(default)]
    pub cooking: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

fn default_quantity() -> String {
    "1".to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Recipe {
    /// Minimal recipe with an English name; everything else empty
    pub fn new(id: impl Into<String>, name: LocalizedText) -> Self {
        Self {
            id: id.into(),
            name,
            country: None,
            difficulty: None,
            tags: Vec::new(),
            ingredients: Vec::new(),
            instructions: BTreeMap::new(),
            servings: None,
            description: None,
            time: None,
            is_user_recipe: false,
        }
    }

    pub fn display_name(&self, language: &str) -> &str {
        localized(&self.name, language).unwrap_or(&self.id)
    }

    pub fn country_name(&self, language: &str) -> Option<&str> {
        self.country.as_ref().and_then(|c| localized(c, language))
    }

    /// The English country name, the value filter matching is keyed on
    pub fn country_en(&self) -> Option<&str> {
        self.country
            .as_ref()
            .and_then(|c| c.get(DEFAULT_LOCALE))
            .map(String::as_str)
    }

    pub fn uses_ingredient(&self, ingredient_id: &str) -> bool {
        self.ingredients
            .iter()
            .any(|line| line.ingredient_id == ingredient_id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn instructions_for(&self, language: &str) -> &[String] {
        self.instructions
            .get(language)
            .or_else(|| self.instructions.get(DEFAULT_LOCALE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl RecipeIngredient {
    pub fn new(ingredient_id: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity: quantity.into(),
        }
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown difficulty '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name(DEFAULT_LOCALE))
    }
}
