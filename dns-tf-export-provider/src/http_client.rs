//! Shared HTTP request handling
//!
//! Providers build their own `RequestBuilder` (URL, auth header, body) and hand it
//! to [`HttpUtils`], which sends it, classifies transport failures, logs a truncated
//! response body and optionally retries transient failures.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Status code and body of a completed HTTP exchange.
pub type RawResponse = (u16, String);

/// HTTP helper functions
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and read the response body.
    ///
    /// Transport failures become `Timeout` or `NetworkError`, HTTP 429 becomes
    /// `RateLimited` and 502..=504 become `NetworkError`. Every other status is
    /// returned to the caller together with the body so that provider specific
    /// error payloads can be mapped.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<RawResponse, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(truncate_for_log(&body)),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Upstream unavailable (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Deserialize a JSON body, turning failures into `MalformedResponse`.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] Unexpected response shape: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::MalformedResponse {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// [`execute_request`](Self::execute_request) with up to `max_retries` extra attempts.
    ///
    /// Only `NetworkError`, `Timeout` and `RateLimited` are retried, with exponential
    /// backoff (100ms doubling, capped at 10s) or the server supplied `Retry-After`
    /// (capped at 30s). `max_retries == 0` sends exactly once.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<RawResponse, ProviderError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, provider_name, method_name, url).await;
        }

        let mut attempt = 0;
        loop {
            // A streamed body cannot be cloned; such requests are sent once.
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Request body is not replayable, sending once");
                return Self::execute_request(request_builder, provider_name, method_name, url)
                    .await;
            };

            match Self::execute_request(req, provider_name, method_name, url).await {
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    attempt += 1;
                    log::warn!(
                        "[{provider_name}] {method_name} {url} failed (attempt {attempt}/{max_retries}), \
                         retrying in {:.1}s: {e}",
                        delay.as_secs_f32(),
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}

/// Transient failures worth another attempt.
fn is_retryable(error: &ProviderError) -> bool {
    matches!(
        error,
        ProviderError::NetworkError { .. }
            | ProviderError::Timeout { .. }
            | ProviderError::RateLimited { .. }
    )
}

/// Delay before the next attempt.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
