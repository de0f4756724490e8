//! Per-operation session context: authentication flag, language and theme.
//!
//! Read fresh from the store at the start of each operation and passed down
//! explicitly; never cached across operations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::locale::DEFAULT_LOCALE;
use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub language: String,
    pub theme: Theme,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            language: DEFAULT_LOCALE.to_string(),
            theme: Theme::Light,
        }
    }
}

impl Session {
    pub fn authenticated(language: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            language: language.into(),
            theme: Theme::Light,
        }
    }

    pub fn anonymous(language: impl Into<String>) -> Self {
        Self {
            is_authenticated: false,
            language: language.into(),
            theme: Theme::Light,
        }
    }
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown theme '{}'",
                other
            ))),
        }
    }
}

/// Language codes are short lowercase tags such as "en" or "el"
pub fn validate_language(code: &str) -> Result<(), DomainError> {
    let valid = (2..=8).contains(&code.len())
        && code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '-' || c == '_');
    if !valid {
        return Err(DomainError::InvariantViolation(format!(
            "Invalid language code '{}'",
            code
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_anonymous_english() {
        let session = Session::default();
        assert!(!session.is_authenticated);
        assert_eq!(session.language, "en");
        assert_eq!(session.theme, Theme::Light);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_language_codes() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("pt-br").is_ok());
        assert!(validate_language("E").is_err());
        assert!(validate_language("").is_err());
    }
}
