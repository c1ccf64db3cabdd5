//! Extract stage: one GET against the reputation API.

mod request;

pub use request::LookupRequest;

use log::{debug, warn};
use serde_json::Value;

use crate::config::HEADER_API_KEY;
use crate::error_handling::ExtractError;

/// Fetches the raw reputation document for `request`.
///
/// Sends the API key in the `Key` header and the request as `ipAddress` /
/// `maxAgeInDays` query parameters. The decoded body is returned untouched.
///
/// # Errors
///
/// - `ExtractError::Status` for any non-success status, with the body text
/// - `ExtractError::Transport` if no response was received
/// - `ExtractError::Decode` if a success body is not JSON
pub async fn extract(
    client: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    request: &LookupRequest,
) -> Result<Value, ExtractError> {
    debug!("GET {} for {}", api_url, request);

    let response = client
        .get(api_url)
        .header(HEADER_API_KEY, api_key)
        .query(&request.query_params())
        .send()
        .await
        .map_err(ExtractError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read error body for {}: {}", request.ip_address, e);
                String::new()
            }
        };
        warn!("Reputation API returned {} for {}", status.as_u16(), request.ip_address);
        return Err(ExtractError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response.json::<Value>().await.map_err(ExtractError::Decode)
}
