use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{PageRequest, RecordSetPage, Zone};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (provider specific format)
    pub code: Option<String>,
    /// HTTP status the error arrived with, if any
    pub status: Option<u16>,
    /// Raw error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            status: None,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            status: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Extra information supplied when mapping an error (internal use)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone the request was about (for `ZoneNotFound`)
    pub zone: Option<String>,
    /// Account the request was about
    pub account: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            ..Default::default()
        }
    }

    pub fn account(account: &str) -> Self {
        Self {
            account: Some(account.to_string()),
            ..Default::default()
        }
    }
}

/// Provider error mapping (internal use)
///
/// Each provider maps its raw API errors onto the unified error type.
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: malformed response
    fn malformed(&self, detail: impl ToString) -> ProviderError {
        ProviderError::MalformedResponse {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read-only view of a DNS provider account: its zones and their record sets.
///
/// Implementations hold an authenticated session; callers never deal with tokens.
#[async_trait]
pub trait ZoneProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Check that the configured credentials are accepted.
    ///
    /// Returns `Ok(false)` when the provider rejects them; other failures are errors.
    async fn validate_credentials(&self) -> Result<bool>;

    /// Name of the first account the authenticated user belongs to.
    async fn primary_account(&self) -> Result<String>;

    /// All zones of an account, in provider order.
    ///
    /// Issued as a single request; the provider is expected to return the complete list.
    async fn list_zones(&self, account: &str) -> Result<Vec<Zone>>;

    /// One page of record sets of a zone.
    ///
    /// A zone with no (more) record sets yields an empty page, not an error.
    async fn list_record_sets(&self, zone: &str, page: &PageRequest) -> Result<RecordSetPage>;
}
