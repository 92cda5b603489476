use crate::config::Config;
use crate::sqlite::SqliteStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SqliteStore,
    pub config: Arc<Config>,
}

#[cfg(test)]
impl AppState {
    /// State backed by a fresh database file inside a temporary directory.
    /// The directory is removed when the returned guard drops.
    pub async fn for_tests() -> (Self, tempfile::TempDir) {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");

        let config = Config {
            database_path: dir.path().join("items.db"),
            service_port: 8000,
            service_host: "127.0.0.1".to_string(),
        };

        let store = SqliteStore::from_config(&config)
            .await
            .expect("Failed to open SQLite store");

        let state = AppState {
            store,
            config: Arc::new(config),
        };
        (state, dir)
    }
}
