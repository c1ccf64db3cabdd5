//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, defaults, variable names)
//! - CLI option types and parsing
//! - Environment-derived library configuration
//! - Startup resolution of the command line against the environment

mod constants;
mod invocation;
mod types;

// Re-export all constants
pub use constants::*;
pub use invocation::{Invocation, InvocationError};
pub use types::{Cli, Config, DatabaseSettings, LogFormat, LogLevel};
