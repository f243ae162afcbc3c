//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::pricing::PricingError;

/// Message returned when a price query resolves to no rule
pub const PRICING_NOT_FOUND_MESSAGE: &str = "pricing structure for given parameters does not exist";

/// Message returned when a required parameter is absent
pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required query parameters.";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{}", MISSING_PARAMETERS_MESSAGE)]
    MissingParameters,

    #[error("{}", PRICING_NOT_FOUND_MESSAGE)]
    PricingNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) | AppError::MissingParameters | AppError::PricingNotFound => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::NotFound => AppError::PricingNotFound,
            err @ PricingError::OutOfRange(_) => AppError::BadRequest(err.to_string()),
            PricingError::Storage(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Database error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
