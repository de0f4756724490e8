// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Resource not found")]
    NotFound,

    /// Neither the local store nor the bundled dataset holds a usable catalog
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// A favorites or plan mutation was attempted without a signed-in session
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("The {plan} plan is full ({capacity} recipes max)")]
    CapacityExceeded { plan: String, capacity: usize },

    #[error("Network error: {0}")]
    Network(String),

    /// Persisted or downloaded JSON that does not match the expected shape
    #[error("Malformed data under '{key}': {reason}")]
    MalformedData { key: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote service answered but refused the request
    #[error("{0}")]
    Rejected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Other(format!("UUID error: {}", err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl AppError {
    /// Domain capacity violations surface as `CapacityExceeded` so callers
    /// can match on a single variant.
    pub fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::CapacityExceeded { plan, capacity } => {
                AppError::CapacityExceeded { plan, capacity }
            }
            other => AppError::Domain(other),
        }
    }

    pub fn malformed(key: impl Into<String>, reason: impl ToString) -> Self {
        AppError::MalformedData {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_domain_error_is_lifted() {
        let err = AppError::from_domain(DomainError::CapacityExceeded {
            plan: "daily".to_string(),
            capacity: 2,
        });
        assert!(matches!(err, AppError::CapacityExceeded { capacity: 2, .. }));
    }

    #[test]
    fn test_invariant_violation_stays_domain() {
        let err = AppError::from_domain(DomainError::InvariantViolation("x".to_string()));
        assert!(matches!(err, AppError::Domain(_)));
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::AuthenticationRequired).unwrap();
        assert_eq!(json, "\"Authentication required\"");
    }
}
