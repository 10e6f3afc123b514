use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::pages::{HtmlTemplate, NotFoundTemplate};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub result: String,
}

/// Custom error type for request handlers
///
/// Maps each failure class to its response shape: a missing post renders
/// the 404 page, everything else becomes a JSON error body.
#[derive(Debug)]
pub enum ApiError {
    /// No post matches the requested path segment
    PostNotFound,
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::PostNotFound => {
                (StatusCode::NOT_FOUND, HtmlTemplate(NotFoundTemplate)).into_response()
            }
            ApiError::DatabaseError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Database error: {}", err),
                }),
            )
                .into_response(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}
