//! Unified error types for the Pizzeria API
//!
//! This module defines error types for each layer:
//! - `ValidationError`: Rejected input for a new restaurant pizza
//! - `DomainError`: Core business logic and persistence errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::Price;

/// Reasons a restaurant pizza cannot be created.
///
/// Messages are part of the HTTP contract and are returned verbatim in the
/// `errors` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Price must be between {} and {}", Price::MIN, Price::MAX)]
    PriceOutOfRange(i64),

    #[error("Restaurant {0} does not exist")]
    UnknownRestaurant(i32),

    #[error("Pizza {0} does not exist")]
    UnknownPizza(i32),
}

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation failed: {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Error response body for JSON responses
///
/// Lookups report a single `error`; input problems report every `errors` entry at once.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorResponse {
    Single { error: String },
    Many { errors: Vec<String> },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Domain(DomainError::NotFound(entity)) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::Single {
                    error: format!("{} not found", entity),
                },
            ),
            AppError::Domain(DomainError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::Many {
                    errors: errors.iter().map(ToString::to_string).collect(),
                },
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::Single {
                        error: "Internal server error".to_string(),
                    },
                )
            }
            AppError::MalformedBody(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::Many { errors: vec![msg] },
            ),
        };

        (status, Json(body)).into_response()
    }
}
