//! Error types for the ticket cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the ticket cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Upstream API unreachable, timed out or answered with a non-2xx status
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream body could not be decoded as a ticket list
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Local store rejected a read or write
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            CacheError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            CacheError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the ticket cache.
pub type Result<T> = std::result::Result<T, CacheError>;
