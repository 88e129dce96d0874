//! REST API error types
//!
//! Every failure renders as `{"error": "<message>"}`. Internal failures always
//! render the same generic message; the cause is only logged.

use taller_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Message returned for every 500
pub const INTERNAL_ERROR_MESSAGE: &str = "Error al procesar la solicitud";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<&'static str>,
        location: ErrorLocation,
    },

    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &'static str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            ApiError::Validation {
                message, field, ..
            } => {
                log::warn!(
                    "Rejected request ({}): {}",
                    field.unwrap_or("body"),
                    message
                );
                message
            }
            ApiError::NotFound { message, .. } => {
                log::info!("{}", message);
                message
            }
            internal @ ApiError::Internal { .. } => {
                log::error!("{}", internal);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal {
            message: format!("Database operation failed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Internal {
            message: format!("Database operation failed: {e}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
