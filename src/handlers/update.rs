use crate::error::{parse_item_id, ApiError, ErrorResponse};
use crate::models::{Item, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

/// PUT /items/:id handler - Overwrite an existing item
///
/// Every field is replaced; an omitted `tax` clears it. The id never changes.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id assigned on creation")
    ),
    request_body = NewItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Malformed JSON body or non-UTF-8 id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid id or missing/invalid fields", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Path(id_str) = path?;
    let id = parse_item_id(&id_str)?;
    let Json(new_item) = payload?;
    new_item.validate()?;

    match state.store.update_item(id, new_item).await? {
        Some(item) => {
            tracing::info!("Updated item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found for update with id: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}
