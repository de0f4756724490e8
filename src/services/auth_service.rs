// src/services/auth_service.rs
//
// Sign-in state is a single local flag; the remote service only decides
// whether to set it.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::integrations::AuthGateway;
use crate::repositories::SettingsRepository;

pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    settings_repo: Arc<dyn SettingsRepository>,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn AuthGateway>, settings_repo: Arc<dyn SettingsRepository>) -> Self {
        Self {
            gateway,
            settings_repo,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> AppResult<()> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let response = self.gateway.login(username.trim(), password).await?;
        if !response.success {
            warn!("Login refused");
            return Err(AppError::Rejected(
                response.message.unwrap_or_else(|| "Login failed".to_string()),
            ));
        }

        self.settings_repo.save_authenticated(true)?;
        info!("Signed in");
        Ok(())
    }

    pub async fn register(&self, email: &str, password: &str, confirm: &str) -> AppResult<()> {
        if email.trim().is_empty() || password.trim().is_empty() || confirm.trim().is_empty() {
            return Err(AppError::Validation("All fields are required".to_string()));
        }
        if password != confirm {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        let response = self.gateway.register(email.trim(), password).await?;
        if !response.success {
            warn!("Registration refused");
            return Err(AppError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string()),
            ));
        }

        self.settings_repo.save_authenticated(true)?;
        info!("Registered and signed in");
        Ok(())
    }

    pub fn logout(&self) -> AppResult<()> {
        self.settings_repo.save_authenticated(false)?;
        info!("Signed out");
        Ok(())
    }
}
