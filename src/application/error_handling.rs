// src/application/error_handling.rs
//
// Error responses for callers at the application boundary
//
// - Maps AppError to a consistent, serializable response
// - Validation failures name the rejected field
// - Internal failures are logged, not echoed

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub field: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A field value was rejected (400)
    Validation,

    /// Input could not be decoded (400)
    Malformed,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(validation_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Validation failed".to_string(),
                field: Some(validation_error.field().to_string()),
                details: Some(validation_error.to_string()),
            },

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Malformed,
                    message: "Input could not be decoded".to_string(),
                    field: None,
                    details: None,
                }
            }
        }
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
