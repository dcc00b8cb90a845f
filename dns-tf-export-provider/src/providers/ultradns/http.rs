//! UltraDNS HTTP request methods

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpUtils, RawResponse};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::error::DATA_NOT_FOUND;
use super::types::{ErrorResponse, TokenResponse};
use super::{TOKEN_PATH, UltraDnsProvider};

impl UltraDnsProvider {
    // ==================== Session ====================

    /// Bearer token for this instance, obtained on first use.
    pub(crate) async fn access_token(&self) -> Result<&str> {
        self.access_token
            .get_or_try_init(|| self.request_token())
            .await
            .map(String::as_str)
    }

    /// Exchange username/password for an access token (password grant).
    async fn request_token(&self) -> Result<String> {
        let url = format!("{}{TOKEN_PATH}", self.base_url);
        log::info!("[ultradns] Opening session for user '{}'", self.username);

        let form = [
            ("grant_type", "password"),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ];
        let request = self.client.post(&url).form(&form);

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "POST",
            &url,
            self.max_retries,
        )
        .await?;

        if let Some(raw) = Self::raw_error(status, &response_text) {
            return Err(self.map_error(raw, ErrorContext::default()));
        }

        let token: TokenResponse = HttpUtils::parse_json(&response_text, self.provider_name())?;
        if token.access_token.is_empty() {
            return Err(self.malformed("token response carries an empty access token"));
        }
        Ok(token.access_token)
    }

    // ==================== Helpers ====================

    /// Extract the API error from a non-2xx response, `None` on success.
    fn raw_error(status: u16, response_text: &str) -> Option<RawApiError> {
        if (200..300).contains(&status) {
            return None;
        }

        if let Ok(error) = serde_json::from_str::<ErrorResponse>(response_text)
            && let Some((code, message)) = error.first()
        {
            return Some(RawApiError {
                code,
                status: Some(status),
                message,
            });
        }

        Some(
            RawApiError::new(format!("HTTP {status}: {}", truncate_for_log(response_text)))
                .status(status),
        )
    }

    /// Authenticated GET, returning status and body.
    async fn send_get(&self, path: &str, query: &str) -> Result<RawResponse> {
        let token = self.access_token().await?;

        let url = if query.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query}", self.base_url)
        };

        let request = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("Accept", "application/json");

        HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            &url,
            self.max_retries,
        )
        .await
    }

    // ==================== Request methods ====================

    /// Execute a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        ctx: ErrorContext,
    ) -> Result<T> {
        let (status, response_text) = self.send_get(path, query).await?;
        if let Some(raw) = Self::raw_error(status, &response_text) {
            return Err(self.map_error(raw, ctx));
        }
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// Execute a GET request on a listing that may legitimately be empty.
    ///
    /// The API answers an empty listing with error `70002`; that is `Ok(None)` here.
    pub(crate) async fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        ctx: ErrorContext,
    ) -> Result<Option<T>> {
        let (status, response_text) = self.send_get(path, query).await?;
        match Self::raw_error(status, &response_text) {
            Some(raw) if raw.code.as_deref() == Some(DATA_NOT_FOUND) => {
                log::debug!("[ultradns] {path}?{query}: no data");
                Ok(None)
            }
            Some(raw) => Err(self.map_error(raw, ctx)),
            None => HttpUtils::parse_json(&response_text, self.provider_name()).map(Some),
        }
    }
}
