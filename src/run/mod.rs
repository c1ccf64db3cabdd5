//! Run orchestration: one extract-transform-load cycle.

use std::time::Instant;

use log::{debug, info};
use uuid::Uuid;

use crate::config::{Config, COLLECTION_NAME};
use crate::error_handling::{EtlError, InitializationError};
use crate::extract::{extract, LookupRequest};
use crate::initialization::init_client;
use crate::storage::{insert_document, DocumentStore};
use crate::transform::{transform, NormalizedRecord};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Identifier of the inserted document
    pub document_id: Uuid,
    /// The record that was stored
    pub record: NormalizedRecord,
    /// Collection the document landed in
    pub collection: &'static str,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs one lookup and stores the result.
///
/// Stages run strictly in order and the first failure aborts the rest:
/// 1. Validate configuration (nothing touches the network before this)
/// 2. Build the connection string and open the document store
/// 3. Extract, transform, load
/// 4. Close the store, whether or not the stages succeeded
///
/// # Errors
///
/// Returns the tagged error of the stage that failed. A failure after the API
/// call does not undo it.
///
/// # Example
///
/// ```no_run
/// use abuseipdb_etl::{run_lookup, Config, LookupRequest};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::from_env()?;
/// let request = LookupRequest::new("8.8.8.8".parse()?, config.max_age_days);
/// let report = run_lookup(&config, request).await?;
/// println!("stored {}", report.document_id);
/// # Ok(())
/// # }
/// ```
pub async fn run_lookup(config: &Config, request: LookupRequest) -> Result<RunReport, EtlError> {
    let start_time = Instant::now();

    config.validate()?;
    let db_url = config.database.connection_url()?;
    let client = init_client().map_err(InitializationError::from)?;

    info!("Fetching data for IP: {}", request.ip_address);
    debug!("Opening document store {}", config.database.redacted_url());
    let store = DocumentStore::connect(&db_url).await?;

    let outcome = extract_transform_load(&client, config, &store, &request).await;
    store.close().await;

    let (document_id, record) = outcome?;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Stored document {} for {} in {:.2}s",
        document_id, request.ip_address, elapsed_seconds
    );

    Ok(RunReport {
        document_id,
        record,
        collection: COLLECTION_NAME,
        elapsed_seconds,
    })
}

async fn extract_transform_load(
    client: &reqwest::Client,
    config: &Config,
    store: &DocumentStore,
    request: &LookupRequest,
) -> Result<(Uuid, NormalizedRecord), EtlError> {
    let raw = extract(client, &config.api_url, &config.api_key, request).await?;
    let record = transform(&raw);
    debug!(
        "Transformed response for {}: score={:?} reports={:?}",
        request.ip_address, record.abuse_confidence_score, record.total_reports
    );
    let persisted = insert_document(store, &record).await?;
    Ok((persisted.id, persisted.record))
}
