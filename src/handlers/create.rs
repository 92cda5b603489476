use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /items/ handler - Create an item
///
/// The store assigns the id; any id in the body is ignored.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = NewItem,
    responses(
        (status = 200, description = "Item created", body = Item),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(new_item) = payload?;
    new_item.validate()?;

    let item = state.store.create_item(new_item).await?;

    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::OK, Json(item)))
}
