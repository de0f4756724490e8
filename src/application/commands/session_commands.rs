// src/application/commands/session_commands.rs
//
// Sign-in and user settings

use crate::application::dto::{MessageDto, SessionDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::Theme;

pub async fn login(
    username: String,
    password: String,
    state: &AppState,
) -> Result<MessageDto, String> {
    state
        .auth_service
        .login(&username, &password)
        .await
        .to_error_response()?;
    Ok(MessageDto::ok("Signed in"))
}

pub async fn register(
    email: String,
    password: String,
    confirm_password: String,
    state: &AppState,
) -> Result<MessageDto, String> {
    state
        .auth_service
        .register(&email, &password, &confirm_password)
        .await
        .to_error_response()?;
    Ok(MessageDto::ok("Registered and signed in"))
}

pub async fn logout(state: &AppState) -> Result<MessageDto, String> {
    state.auth_service.logout().to_error_response()?;
    Ok(MessageDto::ok("Signed out"))
}

pub async fn get_session(state: &AppState) -> Result<SessionDto, String> {
    Ok(state.settings_service.current_session().into())
}

pub async fn set_language(language: String, state: &AppState) -> Result<SessionDto, String> {
    let session = state
        .settings_service
        .set_language(&language)
        .to_error_response()?;
    Ok(session.into())
}

/// Toggle when `theme` is `None`, otherwise set it
pub async fn set_theme(theme: Option<String>, state: &AppState) -> Result<SessionDto, String> {
    match theme {
        None => {
            state
                .settings_service
                .toggle_theme()
                .to_error_response()?;
        }
        Some(value) => {
            let theme = value
                .parse::<Theme>()
                .map_err(|e| ErrorResponse::validation(e.to_string()).to_json())?;
            state
                .settings_service
                .set_theme(theme)
                .to_error_response()?;
        }
    }
    get_session(state).await
}
