//! abuseipdb_etl library: single-shot reputation connector
//!
//! Fetches the AbuseIPDB reputation of one IP address, flattens it into a fixed
//! eleven-field record and appends that record to a document store.
//!
//! # Example
//!
//! ```no_run
//! use abuseipdb_etl::{run_lookup, Config, LookupRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: "your-api-key".to_string(),
//!     ..Default::default()
//! };
//! let request = LookupRequest::new("8.8.8.8".parse()?, 90);
//!
//! let report = run_lookup(&config, request).await?;
//! println!("Stored document {}", report.document_id);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod extract;
pub mod initialization;
mod run;
pub mod storage;
pub mod transform;

// Re-export public API
pub use config::{Cli, Config, DatabaseSettings, Invocation, InvocationError, LogFormat, LogLevel};
pub use error_handling::{
    ConfigError, DatabaseError, EtlError, ExtractError, InitializationError,
};
pub use extract::LookupRequest;
pub use run::{run_lookup, RunReport};
pub use storage::{DocumentStore, PersistedDocument};
pub use transform::NormalizedRecord;
