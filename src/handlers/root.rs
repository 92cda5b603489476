use crate::models::MessageResponse;
use crate::routes;
use axum::Json;

pub const WELCOME_MESSAGE: &str = "Welcome to the FastAPI app!";

/// GET / handler - Welcome message
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    ),
    tag = "root"
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
