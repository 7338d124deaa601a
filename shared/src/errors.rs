use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorListResponse, ErrorResponse};

/// Message returned when an insert trips a database constraint.
pub const GENERIC_VALIDATION_ERROR: &str = "Validation errors";

#[derive(Error, Debug)]
pub enum AppError {
    /// Path resource missing; rendered as `{"error": msg}`.
    #[error("not found: {0}")]
    NotFound(String),

    /// Referenced record in a request body missing; rendered as `{"errors": [msg]}`.
    #[error("missing reference: {0}")]
    MissingReference(String),

    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(vec![message.into()])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::MissingReference(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match self {
            AppError::NotFound(error) => {
                return (status, Json(ErrorResponse { error })).into_response();
            }
            AppError::Validation(errors) => errors,
            AppError::MissingReference(msg) | AppError::Database(msg) => vec![msg],
        };

        (status, Json(ErrorListResponse { errors })).into_response()
    }
}
