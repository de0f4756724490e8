use serde::{Deserialize, Serialize};

use crate::domain::locale::{localized, LocalizedText};

/// A catalog ingredient. Identity is `id`; immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,

    /// Display names keyed by locale, "en" is always present
    pub translations: LocalizedText,

    /// Measuring unit, e.g. "g", "pcs"
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, translations: LocalizedText, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            translations,
            unit: unit.into(),
        }
    }

    /// Display name for `language`, falling back to English and then the id
    pub fn display_name(&self, language: &str) -> &str {
        localized(&self.translations, language).unwrap_or(&self.id)
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name(crate::domain::locale::DEFAULT_LOCALE))
    }
}
