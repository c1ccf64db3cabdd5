//! HTTP client initialization.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::ClientBuilder;

use crate::config::USER_AGENT;

/// Initializes the HTTP client used for the reputation lookup.
///
/// Creates a `reqwest::Client` configured with:
/// - `User-Agent: abuseipdb_etl/<version>`
/// - `Accept: application/json` on every request
/// - Rustls TLS backend
///
/// No timeout is set; the transport defaults apply.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .use_rustls_tls()
        .build()
}
