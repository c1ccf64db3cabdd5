//! Document store connection management.
//!
//! The store is reached through sqlx's `Any` driver so the same code runs against
//! Postgres in production and SQLite in tests. A run opens exactly one handle and
//! closes it before returning.

use log::{debug, error};
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use crate::error_handling::DatabaseError;
use crate::storage::migrations::run_migrations;

/// Open handle to the document store.
///
/// Holds a single-connection pool; `close` must be awaited to release it cleanly.
#[derive(Debug)]
pub struct DocumentStore {
    pool: AnyPool,
}

impl DocumentStore {
    /// Connects to `url` and makes sure the collection exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::ConnectError` if the store is unreachable and
    /// `DatabaseError::MigrationError` if the schema cannot be applied.
    pub async fn connect(url: &str) -> Result<Self, DatabaseError> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|e| {
                error!("Failed to connect to document store: {e}");
                DatabaseError::ConnectError(e)
            })?;

        if let Err(e) = run_migrations(&pool).await {
            pool.close().await;
            return Err(e);
        }

        debug!("Document store ready");
        Ok(Self { pool })
    }

    /// Underlying pool, for queries outside the insert path.
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Closes the pool, waiting for the connection to be returned.
    pub async fn close(self) {
        self.pool.close().await;
        debug!("Document store closed");
    }
}
