//! Shared test helpers for storage module tests.

use sqlx::Row;

use crate::storage::DocumentStore;

/// Opens an in-memory store with the schema applied.
pub async fn create_test_store() -> DocumentStore {
    DocumentStore::connect("sqlite::memory:")
        .await
        .expect("Failed to create test document store")
}

/// Number of documents in the collection.
pub async fn count_documents(store: &DocumentStore) -> i64 {
    sqlx::query("SELECT COUNT(*) AS n FROM abuseipdb_raw")
        .fetch_one(store.pool())
        .await
        .expect("Failed to count documents")
        .get::<i64, _>("n")
}

/// `(id, ip_address, document)` of every stored row.
pub async fn stored_documents(
    store: &DocumentStore,
) -> Vec<(String, Option<String>, serde_json::Value)> {
    sqlx::query("SELECT id, ip_address, document FROM abuseipdb_raw ORDER BY fetched_at")
        .fetch_all(store.pool())
        .await
        .expect("Failed to read documents")
        .into_iter()
        .map(|row| {
            let document: String = row.get("document");
            (
                row.get("id"),
                row.get("ip_address"),
                serde_json::from_str(&document).expect("Stored document is not JSON"),
            )
        })
        .collect()
}
