// src/services/settings_service.rs

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{validate_language, Session, Theme};
use crate::error::{AppError, AppResult};
use crate::repositories::SettingsRepository;

pub struct SettingsService {
    settings_repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self { settings_repo }
    }

    /// Read the session from the store. An unreadable store yields the default
    /// anonymous session.
    pub fn current_session(&self) -> Session {
        self.settings_repo.load_session().unwrap_or_else(|e| {
            warn!(error = %e, "Session settings unreadable, using defaults");
            Session::default()
        })
    }

    pub fn set_language(&self, code: &str) -> AppResult<Session> {
        let code = code.trim();
        validate_language(code).map_err(|e| AppError::Validation(e.to_string()))?;

        self.settings_repo.save_language(code)?;
        info!(language = code, "Language changed");
        Ok(self.current_session())
    }

    pub fn set_theme(&self, theme: Theme) -> AppResult<Theme> {
        self.settings_repo.save_theme(theme)?;
        info!(theme = %theme, "Theme changed");
        Ok(theme)
    }

    /// Switch between light and dark
    pub fn toggle_theme(&self) -> AppResult<Theme> {
        let theme = self.current_session().theme.toggled();
        self.set_theme(theme)
    }
}
