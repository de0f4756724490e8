// src/domain/locale.rs
//
// Localized text helpers shared by ingredients, recipes and countries.

use std::collections::BTreeMap;

/// Locale code used whenever the requested language has no entry
pub const DEFAULT_LOCALE: &str = "en";

/// Mapping of locale code to text, e.g. `{"en": "Tomato", "el": "Ντομάτα"}`
pub type LocalizedText = BTreeMap<String, String>;

/// Resolve `language`, falling back to the default locale.
pub fn localized<'a>(text: &'a LocalizedText, language: &str) -> Option<&'a str> {
    text.get(language)
        .or_else(|| text.get(DEFAULT_LOCALE))
        .map(String::as_str)
}

/// Build a single-locale text in the default locale.
pub fn english(value: impl Into<String>) -> LocalizedText {
    let mut text = LocalizedText::new();
    text.insert(DEFAULT_LOCALE.to_string(), value.into());
    text
}

/// Case-insensitive substring match against every translation.
pub fn any_translation_contains(text: &LocalizedText, needle_lowercase: &str) -> bool {
    text.values()
        .any(|value| value.to_lowercase().contains(needle_lowercase))
}
