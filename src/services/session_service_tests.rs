// src/services/session_service_tests.rs
//
// Sign-in flag handling against a mocked auth gateway, plus language and
// theme settings.

#[cfg(test)]
mod auth_tests {
    use std::sync::Arc;

    use crate::db::ConnectionPool;
    use crate::error::AppError;
    use crate::integrations::{AuthResponse, MockAuthGateway};
    use crate::repositories::{SettingsRepository, SqliteSettingsRepository};
    use crate::services::test_support::test_pool;
    use crate::services::AuthService;

    fn settings(pool: &Arc<ConnectionPool>) -> Arc<SqliteSettingsRepository> {
        Arc::new(SqliteSettingsRepository::new(pool.clone()))
    }

    fn signed_in(pool: &Arc<ConnectionPool>) -> bool {
        settings(pool).load_session().unwrap().is_authenticated
    }

    #[tokio::test]
    async fn test_successful_login_sets_flag() {
        let pool = test_pool();
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().times(1).returning(|username, _password| {
            Ok(AuthResponse {
                success: username == "maria",
                message: None,
            })
        });

        let service = AuthService::new(Arc::new(gateway), settings(&pool));
        service.login("  maria ", "secret").await.unwrap();

        assert!(signed_in(&pool));
    }

    #[tokio::test]
    async fn test_refused_login_reports_server_message() {
        let pool = test_pool();
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().returning(|_, _| {
            Ok(AuthResponse {
                success: false,
                message: Some("Invalid credentials".to_string()),
            })
        });

        let service = AuthService::new(Arc::new(gateway), settings(&pool));
        let result = service.login("maria", "wrong").await;

        assert!(matches!(result, Err(AppError::Rejected(ref m)) if m == "Invalid credentials"));
        assert!(!signed_in(&pool));
    }

    #[tokio::test]
    async fn test_refusal_without_message_uses_default() {
        let pool = test_pool();
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().returning(|_, _| {
            Ok(AuthResponse {
                success: false,
                message: None,
            })
        });

        let service = AuthService::new(Arc::new(gateway), settings(&pool));
        let result = service.login("maria", "wrong").await;

        assert!(matches!(result, Err(AppError::Rejected(ref m)) if m == "Login failed"));
    }

    #[tokio::test]
    async fn test_blank_credentials_never_reach_gateway() {
        let pool = test_pool();
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().times(0);

        let service = AuthService::new(Arc::new(gateway), settings(&pool));

        assert!(matches!(
            service.login("", "secret").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.login("maria", "   ").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_network_failure_keeps_signed_out() {
        let pool = test_pool();
        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_login()
            .returning(|_, _| Err(AppError::Network("timeout".to_string())));

        let service = AuthService::new(Arc::new(gateway), settings(&pool));

        assert!(matches!(
            service.login("maria", "secret").await,
            Err(AppError::Network(_))
        ));
        assert!(!signed_in(&pool));
    }

    #[tokio::test]
    async fn test_register_checks_password_confirmation() {
        let pool = test_pool();
        let mut gateway = MockAuthGateway::new();
        gateway.expect_register().times(0);

        let service = AuthService::new(Arc::new(gateway), settings(&pool));
        let result = service.register("maria@example.com", "one", "two").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_then_logout() {
        let pool = test_pool();
        let mut gateway = MockAuthGateway::new();
        gateway.expect_register().times(1).returning(|_, _| {
            Ok(AuthResponse {
                success: true,
                message: Some("Registered".to_string()),
            })
        });

        let service = AuthService::new(Arc::new(gateway), settings(&pool));
        service
            .register("maria@example.com", "secret", "secret")
            .await
            .unwrap();
        assert!(signed_in(&pool));

        service.logout().unwrap();
        assert!(!signed_in(&pool));
    }
}

#[cfg(test)]
mod settings_tests {
    use std::sync::Arc;

    use crate::domain::Theme;
    use crate::error::AppError;
    use crate::repositories::SqliteSettingsRepository;
    use crate::services::test_support::test_pool;
    use crate::services::SettingsService;

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(SqliteSettingsRepository::new(test_pool())))
    }

    #[test]
    fn test_defaults() {
        let session = service().current_session();
        assert_eq!(session.language, "en");
        assert_eq!(session.theme, Theme::Light);
        assert!(!session.is_authenticated);
    }

    #[test]
    fn test_set_language() {
        let service = service();
        let session = service.set_language("el").unwrap();
        assert_eq!(session.language, "el");
        assert_eq!(service.current_session().language, "el");
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        let service = service();
        assert!(matches!(
            service.set_language("Ελληνικά"),
            Err(AppError::Validation(_))
        ));
        assert_eq!(service.current_session().language, "en");
    }

    #[test]
    fn test_toggle_theme_flips_and_persists() {
        let service = service();
        assert_eq!(service.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(service.current_session().theme, Theme::Dark);
        assert_eq!(service.toggle_theme().unwrap(), Theme::Light);
    }
}
