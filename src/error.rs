//! Error types for the cache library and its HTTP front end
//!
//! Cache operations themselves are total; only construction can fail.
//! The remaining variants are raised by the API layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must be at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidCapacity(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
pub type Result<T> = std::result::Result<T, CacheError>;
