//! Error handling.
//!
//! Errors are grouped by the stage that raises them:
//! - **Configuration**: missing or malformed settings, raised before any I/O
//! - **Request**: the reputation API call failed or returned a non-success status
//! - **Storage**: the document store could not be reached or refused the insert
//! - **Initialization**: logger or HTTP client setup failed
//!
//! `EtlError` wraps all of them so callers can decide how to map a failed run
//! to an exit code.

mod types;

// Re-export public API
pub use types::{
    ConfigError, DatabaseError, EtlError, ExtractError, InitializationError,
};
