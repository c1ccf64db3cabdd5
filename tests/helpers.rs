// Shared helpers for integration tests: a mocked reputation API and file-backed stores.

use abuseipdb_etl::{Config, DatabaseSettings, DocumentStore};
use sqlx::Row;
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mocked `check` endpoint is mounted on.
pub const CHECK_PATH: &str = "/api/v2/check";

/// Creates an empty SQLite file to act as the document store.
pub fn create_temp_store_file() -> NamedTempFile {
    NamedTempFile::new().expect("Failed to create temp database file")
}

/// Connection string for a SQLite file.
pub fn sqlite_url(file: &NamedTempFile) -> String {
    format!("sqlite:{}", file.path().display())
}

/// Config pointing at the mock server and a SQLite file.
pub fn create_test_config(server: &MockServer, db_url: &str) -> Config {
    Config {
        api_key: "test-api-key".to_string(),
        api_url: format!("{}{}", server.uri(), CHECK_PATH),
        database: DatabaseSettings {
            url: Some(db_url.to_string()),
            ..Default::default()
        },
        max_age_days: 90,
    }
}

/// Mounts a `check` endpoint answering `status` with `body` for `ip`.
///
/// `expected_calls` is verified when the server is dropped.
pub async fn mount_check(
    server: &MockServer,
    ip: &str,
    status: u16,
    body: serde_json::Value,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(CHECK_PATH))
        .and(header("Key", "test-api-key"))
        .and(query_param("ipAddress", ip))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Reads every stored document for `ip`, oldest first.
#[allow(dead_code)] // Not every test file reads documents back
pub async fn read_documents(db_url: &str, ip: &str) -> Vec<(String, serde_json::Value)> {
    let store = DocumentStore::connect(db_url)
        .await
        .expect("Failed to reopen document store");
    let rows = sqlx::query(
        "SELECT id, document FROM abuseipdb_raw WHERE ip_address = $1 ORDER BY fetched_at",
    )
    .bind(ip.to_string())
    .fetch_all(store.pool())
    .await
    .expect("Failed to read documents");

    let docs = rows
        .into_iter()
        .map(|row| {
            let document: String = row.get("document");
            (
                row.get::<String, _>("id"),
                serde_json::from_str(&document).expect("Stored document is not JSON"),
            )
        })
        .collect();
    store.close().await;
    docs
}
