// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Invalid input/validation error (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Broken configuration file
    Configuration,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(DomainError::InvalidFacetValue { facet, value }) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: format!("Invalid value for {}", facet),
                details: Some(value),
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Config(message) => {
                log::error!("Configuration error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Configuration is invalid".to_string(),
                    details: Some(message),
                }
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Validation,
                    message: "Malformed data".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::LockPoisoned => {
                log::error!("Catalog lock poisoned");

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Catalog is unavailable".to_string(),
                    details: None,
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Validation,
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

    /// JSON form handed back to presentation callers
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisoned_lock_is_internal() {
        let error = ErrorResponse::from_app_error(AppError::LockPoisoned);
        assert_eq!(error.error_type, ErrorType::Internal);
        assert_eq!(error.message, "Catalog is unavailable");
    }

    #[test]
    fn test_duplicate_id_is_domain_error() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::DuplicateId(
            "abc".to_string(),
        )));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert!(error.details.unwrap().contains("abc"));
    }

    #[test]
    fn test_bad_facet_is_validation_error() {
        let error = ErrorResponse::from_app_error(AppError::Domain(DomainError::InvalidFacetValue {
            facet: "releaseDay",
            value: "Funday".to_string(),
        }));
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.details.as_deref(), Some("Funday"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::validation("Invalid title id".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"validation\""));
        assert!(json.contains("Invalid title id"));
    }

    #[test]
    fn test_to_error_response_encodes_json() {
        let result: Result<(), AppError> = Err(AppError::Config("bad".to_string()));
        let message = result.to_error_response().unwrap_err();
        let decoded: ErrorResponse = serde_json::from_str(&message).unwrap();
        assert_eq!(decoded.error_type, ErrorType::Configuration);
    }
}
