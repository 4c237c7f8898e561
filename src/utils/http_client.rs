// ABOUTME: HTTP client construction with pass-through timeout configuration
// ABOUTME: Provides client builders and the JSON POST helper every Withings call goes through

use crate::config::HttpClientConfig;
use crate::errors::{WithingsError, WithingsResult};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Create a new HTTP client from the given timeout configuration
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client(config: &HttpClientConfig) -> Client {
    create_client_with_timeout(config.timeout_secs, config.connect_timeout_secs)
}

/// Create a new HTTP client with custom timeout settings
///
/// # Arguments
/// * `timeout_secs` - Request timeout in seconds
/// * `connect_timeout_secs` - Connection timeout in seconds
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Join the API base URL and an endpoint path with exactly one slash
#[must_use]
pub fn endpoint_url(api_base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// POST a JSON body and return the decoded JSON response verbatim
///
/// Non-2xx statuses become [`WithingsError::ApiError`] with the body preserved;
/// 2xx bodies are not inspected beyond JSON decoding.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status, or a body that
/// is not JSON
pub async fn post_json(
    client: &Client,
    api_base_url: &str,
    endpoint: &str,
    body: &Value,
    bearer_token: Option<&str>,
) -> WithingsResult<Value> {
    let url = endpoint_url(api_base_url, endpoint);
    debug!("Starting Withings API request to endpoint: {endpoint}");

    let mut request = client.post(&url).json(body);
    if let Some(token) = bearer_token {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = request.send().await.map_err(|e| {
        WithingsError::http(format!("Failed to send request to {endpoint}"), e)
    })?;

    let status = response.status();
    debug!("Withings API response status: {status}");

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        error!(
            "Withings API request failed - endpoint: {endpoint}, status: {status}, body_length: {} bytes",
            text.len()
        );
        return Err(WithingsError::ApiError {
            endpoint: endpoint.to_owned(),
            status_code: status.as_u16(),
            body: text,
        });
    }

    let text = response.text().await.map_err(|e| {
        WithingsError::http(format!("Failed to read response from {endpoint}"), e)
    })?;

    serde_json::from_str(&text).map_err(|e| WithingsError::InvalidResponse {
        endpoint: endpoint.to_owned(),
        reason: format!("Failed to parse API response: {e}"),
    })
}
