//! Unified error types for the Itemdesk API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Use case and repository errors
//! - `AppError`: HTTP layer errors (wraps domain errors for responses)
//! - `ConfigError`: Startup configuration errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
///
/// `Validation`, `NotFound` and `BusinessRule` are the kinds handlers
/// dispatch on. Everything else is a server-side failure.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BusinessRule(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::Validation(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::BusinessRule(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Domain(DomainError::Database(_) | DomainError::Internal(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error = match self {
            AppError::Domain(DomainError::Validation(msg))
            | AppError::Domain(DomainError::NotFound(msg))
            | AppError::Domain(DomainError::BusinessRule(msg))
            | AppError::BadRequest(msg) => msg,
            AppError::Domain(e @ (DomainError::Database(_) | DomainError::Internal(_))) => {
                tracing::error!(error = %e, "Request failed");
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
