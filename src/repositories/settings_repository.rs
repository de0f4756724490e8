// src/repositories/settings_repository.rs
//
// Session flags are stored as plain strings, not JSON.
// `isAuthenticated` holds "true" while signed in and is removed on logout.

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Session, Theme, DEFAULT_LOCALE};
use crate::error::AppResult;
use crate::repositories::kv::{delete_value, get_value, put_value, StorageKey};

const AUTHENTICATED_FLAG: &str = "true";

pub trait SettingsRepository: Send + Sync {
    /// Reads language, theme and the authentication flag in one checkout.
    fn load_session(&self) -> AppResult<Session>;
    fn save_language(&self, language: &str) -> AppResult<()>;
    fn save_theme(&self, theme: Theme) -> AppResult<()>;
    fn save_authenticated(&self, authenticated: bool) -> AppResult<()>;
}

pub struct SqliteSettingsRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSettingsRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SettingsRepository for SqliteSettingsRepository {
    fn load_session(&self) -> AppResult<Session> {
        let conn = self.pool.get()?;

        let is_authenticated = get_value(&conn, StorageKey::IsAuthenticated)?.as_deref()
            == Some(AUTHENTICATED_FLAG);
        let language = get_value(&conn, StorageKey::AppLanguage)?
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        // Unknown theme strings fall back to light
        let theme = get_value(&conn, StorageKey::AppTheme)?
            .and_then(|t| t.parse::<Theme>().ok())
            .unwrap_or_default();

        Ok(Session {
            is_authenticated,
            language,
            theme,
        })
    }

    fn save_language(&self, language: &str) -> AppResult<()> {
        let conn = self.pool.get()?;
        put_value(&conn, StorageKey::AppLanguage, language)
    }

    fn save_theme(&self, theme: Theme) -> AppResult<()> {
        let conn = self.pool.get()?;
        put_value(&conn, StorageKey::AppTheme, theme.as_str())
    }

    fn save_authenticated(&self, authenticated: bool) -> AppResult<()> {
        let conn = self.pool.get()?;
        if authenticated {
            put_value(&conn, StorageKey::IsAuthenticated, AUTHENTICATED_FLAG)
        } else {
            delete_value(&conn, StorageKey::IsAuthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_in_memory_pool, initialize_database};

    fn repo() -> (Arc<ConnectionPool>, SqliteSettingsRepository) {
        let pool = Arc::new(create_in_memory_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();
        (pool.clone(), SqliteSettingsRepository::new(pool))
    }

    #[test]
    fn test_empty_store_yields_default_session() {
        let (_, repo) = repo();
        assert_eq!(repo.load_session().unwrap(), Session::default());
    }

    #[test]
    fn test_authentication_flag() {
        let (_, repo) = repo();

        repo.save_authenticated(true).unwrap();
        assert!(repo.load_session().unwrap().is_authenticated);

        repo.save_authenticated(false).unwrap();
        assert!(!repo.load_session().unwrap().is_authenticated);
    }

    #[test]
    fn test_only_literal_true_counts_as_signed_in() {
        let (pool, repo) = repo();
        put_value(&pool.get().unwrap(), StorageKey::IsAuthenticated, "yes").unwrap();
        assert!(!repo.load_session().unwrap().is_authenticated);
    }

    #[test]
    fn test_language_and_theme_persist() {
        let (_, repo) = repo();
        repo.save_language("el").unwrap();
        repo.save_theme(Theme::Dark).unwrap();

        let session = repo.load_session().unwrap();
        assert_eq!(session.language, "el");
        assert_eq!(session.theme, Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        let (pool, repo) = repo();
        put_value(&pool.get().unwrap(), StorageKey::AppTheme, "sepia").unwrap();
        assert_eq!(repo.load_session().unwrap().theme, Theme::Light);
    }
}
