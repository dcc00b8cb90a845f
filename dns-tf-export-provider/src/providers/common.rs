//! Helpers shared by provider implementations

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with connect and request timeouts.
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ Endpoint handling ============

/// Turn a bare host or a URL into a base URL without trailing slash.
///
/// `"restapi.ultradns.com"` -> `"https://restapi.ultradns.com"`,
/// `"http://127.0.0.1:8080/"` -> `"http://127.0.0.1:8080"`.
pub fn normalize_base_url(host_or_url: &str) -> String {
    let trimmed = host_or_url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Percent-encode one path segment (zone or account name).
pub fn path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
