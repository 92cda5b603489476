use crate::error::{parse_item_id, ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

/// GET /items/:id handler - Retrieve a single item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id assigned on creation")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Id segment is not valid UTF-8", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Path(id_str) = path?;
    let id = parse_item_id(&id_str)?;

    match state.store.get_item(id).await? {
        Some(item) => {
            tracing::info!("Retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}
