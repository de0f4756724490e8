// src/integrations/auth_client.rs
//
// Remote authentication endpoints
//
// Both endpoints answer `{ "success": bool, "message": string? }`. A refusal is
// a normal response, not a transport error; the service decides what it means.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> AppResult<AuthResponse>;
    async fn register(&self, email: &str, password: &str) -> AppResult<AuthResponse>;
}

pub struct HttpAuthClient {
    base_url: String,
    http_client: Client,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<AuthResponse> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "Calling auth endpoint");

        let response = self.http_client.post(&url).json(body).send().await?;

        // The endpoints report refusals with a JSON body even on 4xx
        let status = response.status();
        let body = response.text().await?;
        match serde_json::from_str::<AuthResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(AppError::Network(format!(
                "POST {} returned HTTP {}",
                url, status
            ))),
            Err(e) => Err(AppError::malformed(path, e)),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthClient {
    async fn login(&self, username: &str, password: &str) -> AppResult<AuthResponse> {
        self.post("login", &LoginRequest { username, password })
            .await
    }

    async fn register(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        self.post("register", &RegisterRequest { email, password })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpAuthClient::new("https://auth.example/v1/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "https://auth.example/v1");
    }

    #[test]
    fn test_response_message_is_optional() {
        let parsed: AuthResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.message.is_none());
    }

    #[test]
    fn test_login_body_shape() {
        let body = serde_json::to_value(LoginRequest {
            username: "maria",
            password: "secret",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"username": "maria", "password": "secret"}));
    }
}
