//! Error type definitions.
//!
//! One enum per failure family, plus `EtlError` which tags them for the caller.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Configuration errors, raised before any network or storage activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `API_KEY` is unset or empty.
    #[error("API_KEY not found in environment variables")]
    MissingApiKey,

    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value as found in the environment
        value: String,
    },

    /// The connection string assembled from `DB_HOST`/`DB_NAME` is not a valid URL.
    #[error("Invalid database connection string: {0}")]
    InvalidDatabaseUrl(#[from] url::ParseError),

    /// `DB_USER`/`DB_PASS` cannot be placed in the connection string.
    #[error("Database credentials cannot be encoded into the connection string")]
    InvalidCredentials,
}

/// Errors raised by the reputation API call.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The API answered with a non-success status.
    #[error("API Request Failed: {status} {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Connection, TLS or protocol failure before a status was received.
    #[error("API request could not be sent: {0}")]
    Transport(#[source] ReqwestError),

    /// The success body is not JSON.
    #[error("API response is not valid JSON: {0}")]
    Decode(#[source] ReqwestError),
}

impl ExtractError {
    /// HTTP status code, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ExtractError::Status { status, .. } => Some(*status),
            ExtractError::Transport(e) | ExtractError::Decode(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Error types for document store operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Opening the connection pool failed.
    #[error("Failed to connect to document store: {0}")]
    ConnectError(#[source] sqlx::Error),

    /// Applying the schema failed.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// The record could not be serialized into a document.
    #[error("Document serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Failure of one pipeline run, tagged by the stage that produced it.
#[derive(Error, Debug)]
pub enum EtlError {
    /// Configuration error (missing API key, bad variable).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Request error from the reputation API.
    #[error(transparent)]
    Request(#[from] ExtractError),

    /// Storage error from the document store.
    #[error(transparent)]
    Storage(#[from] DatabaseError),

    /// HTTP client or logger setup failure.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

impl EtlError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            EtlError::Config(_) => 2,
            EtlError::Request(_) => 3,
            EtlError::Storage(_) => 4,
            EtlError::Initialization(_) => 5,
        }
    }

    /// Short stage label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            EtlError::Config(_) => "configuration",
            EtlError::Request(_) => "request",
            EtlError::Storage(_) => "storage",
            EtlError::Initialization(_) => "initialization",
        }
    }
}
