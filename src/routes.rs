// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items/";
pub const ITEM: &str = "/items/{id}";
pub const DOCS: &str = "/docs";
pub const OPENAPI: &str = "/openapi.json";
