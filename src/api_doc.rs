use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{Item, MessageResponse, NewItem};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        version = "1.0.0",
        description = "Create, read, update and delete items stored in a local SQLite file"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            NewItem,
            MessageResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "root", description = "Welcome endpoint"),
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item CRUD operations")
    )
)]
pub struct ApiDoc;
