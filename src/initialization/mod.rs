//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the process-wide pieces:
//! - Logger
//! - HTTP client
//!
//! The document store handle is opened per run by `storage::DocumentStore`.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
