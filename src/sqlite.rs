use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::path::Path;

use crate::config::Config;
use crate::models::{Item, NewItem};

/// Handle to the SQLite file backing the `items` table
///
/// Holds connect options only. Every operation opens its own connection,
/// runs a single statement and drops the connection again, so the handle is
/// cheap to clone into request state. Only `initialize` may create the data
/// file; every other connection fails if the file has gone missing.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    options: SqliteConnectOptions,
}

impl SqliteStore {
    /// Create a store from configuration and make sure the table exists
    pub async fn from_config(config: &Config) -> Result<Self> {
        Self::open(&config.database_path).await
    }

    /// Open (creating if needed) the data file at `path` and initialize it
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false);

        let store = Self { options };
        store.initialize().await?;

        tracing::info!("Using SQLite database: {}", path.display());
        Ok(store)
    }

    async fn connect(&self) -> Result<SqliteConnection> {
        SqliteConnection::connect_with(&self.options)
            .await
            .context("Failed to open SQLite connection")
    }

    /// Create the `items` table if it does not exist yet. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<()> {
        let create_options = self.options.clone().create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&create_options)
            .await
            .context("Failed to create SQLite database")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                tax REAL
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .context("Failed to create items table")?;

        tracing::debug!("Items table ready");
        Ok(())
    }

    /// All items in the store's natural row order
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let mut conn = self.connect().await?;

        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, price, tax FROM items",
        )
        .fetch_all(&mut conn)
        .await
        .context("Failed to list items")?;

        tracing::debug!("Listed {} items", items.len());
        Ok(items)
    }

    /// Insert a row and return it with the id the store assigned
    pub async fn create_item(&self, new_item: NewItem) -> Result<Item> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            "INSERT INTO items (name, description, price, tax) VALUES (?, ?, ?, ?)",
        )
        .bind(&new_item.name)
        .bind(&new_item.description)
        .bind(new_item.price)
        .bind(new_item.tax)
        .execute(&mut conn)
        .await
        .context("Failed to insert item")?;

        let id = result.last_insert_rowid();
        tracing::debug!("Inserted item with id: {}", id);
        Ok(new_item.into_item(id))
    }

    /// Read one item by id
    ///
    /// # Returns
    /// * `Ok(Some(item))` - Item found
    /// * `Ok(None)` - No row with this id
    /// * `Err(_)` - Connection or query failed
    pub async fn get_item(&self, id: i64) -> Result<Option<Item>> {
        let mut conn = self.connect().await?;

        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, price, tax FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await
        .context("Failed to read item")?;

        Ok(item)
    }

    /// Overwrite every field of an existing row. `Ok(None)` if no row matched.
    pub async fn update_item(&self, id: i64, new_item: NewItem) -> Result<Option<Item>> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(
            "UPDATE items SET name = ?, description = ?, price = ?, tax = ? WHERE id = ?",
        )
        .bind(&new_item.name)
        .bind(&new_item.description)
        .bind(new_item.price)
        .bind(new_item.tax)
        .bind(id)
        .execute(&mut conn)
        .await
        .context("Failed to update item")?;

        if result.rows_affected() == 0 {
            tracing::debug!("No item to update with id: {}", id);
            return Ok(None);
        }

        tracing::debug!("Updated item with id: {}", id);
        Ok(Some(new_item.into_item(id)))
    }

    /// Remove a row, returning it as it was just before removal.
    /// `Ok(None)` if no row matched.
    pub async fn delete_item(&self, id: i64) -> Result<Option<Item>> {
        let mut conn = self.connect().await?;

        let deleted = sqlx::query_as::<_, Item>(
            "DELETE FROM items WHERE id = ? RETURNING id, name, description, price, tax",
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await
        .context("Failed to delete item")?;

        tracing::debug!("Delete item with id: {} (found: {})", id, deleted.is_some());
        Ok(deleted)
    }

    /// Open a connection and run `SELECT 1`
    pub async fn health_check(&self) -> Result<()> {
        let mut conn = self.connect().await?;

        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut conn)
            .await
            .context("Failed to execute health check query")?;

        if one == 1 {
            Ok(())
        } else {
            Err(anyhow::anyhow!("Health check query returned {}", one))
        }
    }
}
