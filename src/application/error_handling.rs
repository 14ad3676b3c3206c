// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides a consistent error format for the CLI
// - Never exposes internal implementation details
// - Logs errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response printed by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Entry not found
    NotFound,

    /// Malformed input (bad uuid, date, kind, format...)
    Validation,

    /// Domain invariant violation
    DomainError,

    /// Database/persistence error
    Database,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorType {
    /// Process exit code used by the CLI for this category
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorType::NotFound => 3,
            ErrorType::Validation | ErrorType::DomainError => 2,
            _ => 1,
        }
    }
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Entry"),

            AppError::Validation(message) => Self::validation(message),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Database(db_error) => {
                // Log full error for debugging
                error!("Database error: {:?}", db_error);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database operation failed".to_string(),
                    details: Some("Run with -v for details".to_string()),
                }
            }

            AppError::Pool(pool_error) => {
                error!("Connection pool error: {}", pool_error);

                Self {
                    success: false,
                    error_type: ErrorType::Database,
                    message: "Database connection failed".to_string(),
                    details: None,
                }
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Entry not found");
        assert_eq!(error.error_type.exit_code(), 3);
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::from_app_error(AppError::Validation("Invalid input".to_string()));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn test_domain_error_keeps_details() {
        let error = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::InvariantViolation("title must not be empty".to_string()),
        ));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert!(error.details.unwrap().contains("title must not be empty"));
    }

    #[test]
    fn test_other_error_is_internal() {
        let response = ErrorResponse::from_app_error(AppError::Other("boom".to_string()));
        assert_eq!(response.error_type, ErrorType::Internal);
        assert_eq!(response.error_type.exit_code(), 1);
    }

    #[test]
    fn test_serialization() {
        let json = ErrorResponse::not_found("Entry").to_json();
        assert!(json.contains("not_found"));
        assert!(json.contains("Entry not found"));
    }
}
