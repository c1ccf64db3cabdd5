//! Startup: command line plus environment configuration.
//!
//! The environment is checked before command-line errors are reported, so a
//! missing `API_KEY` always surfaces as a configuration error. `--help` and
//! `--version` still work without any configuration.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::types::{Cli, Config};
use crate::error_handling::ConfigError;
use crate::extract::LookupRequest;

/// Why startup stopped before a run could begin.
#[derive(Debug)]
pub enum InvocationError {
    /// Environment configuration is unusable.
    Config(ConfigError),
    /// Command-line parsing stopped (bad input, `--help`, `--version`).
    Usage(clap::Error),
}

/// Everything a run needs from its invocation.
#[derive(Debug)]
pub struct Invocation {
    /// Parsed command line
    pub cli: Cli,
    /// Environment-derived configuration
    pub config: Config,
}

impl Invocation {
    /// Parses `args` and reads configuration from `lookup`.
    ///
    /// Help and version requests are returned first; otherwise configuration
    /// errors take precedence over command-line errors.
    pub fn from_args<I, T, F>(args: I, lookup: F) -> Result<Self, InvocationError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        F: Fn(&str) -> Option<String>,
    {
        let parsed = match Cli::try_parse_from(args) {
            Err(e) if is_informational(&e) => return Err(InvocationError::Usage(e)),
            other => other,
        };

        let config = Config::from_lookup(lookup).map_err(InvocationError::Config)?;
        let cli = parsed.map_err(InvocationError::Usage)?;

        Ok(Self { cli, config })
    }

    /// The lookup to run: `--days`, else `MAX_AGE_DAYS`, else 90.
    pub fn lookup_request(&self) -> LookupRequest {
        LookupRequest::new(
            self.cli.ip,
            self.cli.days.unwrap_or(self.config.max_age_days),
        )
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}
