use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Detail returned with every 404 for an unknown item id
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Validation failures are raised before the store is touched. Not-found
/// always carries the same detail text regardless of id.
#[derive(Debug)]
pub enum ApiError {
    /// No row for the given id
    ItemNotFound(i64),
    /// Path segment could not be extracted at all (e.g. invalid UTF-8)
    InvalidPath(PathRejection),
    /// Path id is not an integer
    InvalidItemId(String),
    /// Body parsed but failed semantic validation
    InvalidItem(String),
    /// Body missing, malformed, or of the wrong shape
    InvalidBody(JsonRejection),
    /// Database operation error
    DatabaseError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::ItemNotFound(_) => (StatusCode::NOT_FOUND, ITEM_NOT_FOUND.to_string()),
            ApiError::InvalidPath(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::InvalidItemId(id) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid item id: expected an integer, got '{}'", id),
            ),
            ApiError::InvalidItem(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid item: {}", msg),
            ),
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection)
    }
}

/// Parse the `{id}` path segment of an item route
pub fn parse_item_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidItemId(raw.to_string()))
}
