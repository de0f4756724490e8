// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides consistent error format for the CLI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories the caller can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Sign in and retry
    AuthenticationRequired,

    /// The daily plan is full
    CapacityExceeded,

    /// Remote source unreachable or refused the connection
    Network,

    /// The remote service answered but refused the request
    Rejected,

    /// Invalid input
    Validation,

    /// Stored or downloaded data has the wrong shape
    MalformedData,

    /// No catalog could be loaded
    CatalogUnavailable,

    NotFound,

    /// Domain invariant violation
    DomainError,

    /// Database/persistence error
    Database,

    Configuration,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::AuthenticationRequired => Self::new(
                ErrorType::AuthenticationRequired,
                "Please sign in to continue",
                None,
            ),

            AppError::CapacityExceeded { plan, capacity } => Self::new(
                ErrorType::CapacityExceeded,
                format!("The {} plan can hold at most {} recipes", plan, capacity),
                None,
            ),

            AppError::Network(details) => Self::new(
                ErrorType::Network,
                "Could not reach the remote service",
                Some(details),
            ),

            AppError::Rejected(message) => Self::new(ErrorType::Rejected, message, None),

            AppError::Validation(message) => Self::new(ErrorType::Validation, message, None),

            AppError::MalformedData { key, reason } => Self::new(
                ErrorType::MalformedData,
                format!("The {} data is not in the expected format", key),
                Some(reason),
            ),

            AppError::CatalogUnavailable(details) => Self::new(
                ErrorType::CatalogUnavailable,
                "No recipe catalog is available",
                Some(details),
            ),

            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Database(db_error) => {
                error!(error = ?db_error, "Database error");
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                error!(error = %pool_error, "Connection pool error");
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Serialization(serde_error) => {
                error!(error = ?serde_error, "Serialization error");
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                error!(error = ?io_error, "IO error");
                Self::new(
                    ErrorType::Internal,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Config(message) => {
                Self::new(ErrorType::Configuration, "Invalid configuration", Some(message))
            }

            AppError::Other(message) => {
                error!(message = %message, "Unclassified error");
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}
