use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, get_handler, health_handler, list_handler, root_handler,
    update_handler,
};
use crate::routes;
use crate::state::AppState;

/// Assemble every route, the Swagger UI and request tracing into one router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(root_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::ITEMS, get(list_handler).post(create_handler))
        .route(
            routes::ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
