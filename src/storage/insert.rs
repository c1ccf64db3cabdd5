//! Load stage: append one document to the collection.
//!
//! Inserts are append-only. There is no upsert path, so every run leaves its own
//! snapshot behind.

use chrono::SecondsFormat;
use log::{debug, error};
use uuid::Uuid;

use crate::config::COLLECTION_NAME;
use crate::error_handling::DatabaseError;
use crate::storage::models::PersistedDocument;
use crate::storage::DocumentStore;
use crate::transform::NormalizedRecord;

/// Inserts `record` as a new document and returns it with its identifier.
///
/// # Errors
///
/// Returns `DatabaseError::SqlError` if the store rejects the insert.
pub async fn insert_document(
    store: &DocumentStore,
    record: &NormalizedRecord,
) -> Result<PersistedDocument, DatabaseError> {
    let id = Uuid::new_v4();
    let document = serde_json::to_string(&record.to_document()?)?;
    let fetched_at = record
        .fetched_at
        .to_rfc3339_opts(SecondsFormat::Micros, true);

    let sql = format!(
        "INSERT INTO {} (id, ip_address, fetched_at, document) VALUES ($1, $2, $3, $4)",
        COLLECTION_NAME
    );
    sqlx::query(&sql)
        .bind(id.to_string())
        .bind(record.ip_address_str().map(str::to_string))
        .bind(fetched_at)
        .bind(document)
        .execute(store.pool())
        .await
        .map_err(|e| {
            error!("Failed to insert document into {}: {e}", COLLECTION_NAME);
            DatabaseError::SqlError(e)
        })?;

    debug!("Inserted document {} into {}", id, COLLECTION_NAME);

    Ok(PersistedDocument {
        id,
        record: record.clone(),
    })
}
