//! UltraDNS error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::UltraDnsProvider;

/// "Data not found", sent for listings with nothing in them.
pub(crate) const DATA_NOT_FOUND: &str = "70002";

/// UltraDNS error code mapping
/// Reference: UltraDNS REST API user guide, "Error Codes"
impl ProviderErrorMapper for UltraDnsProvider {
    fn provider_name(&self) -> &'static str {
        "ultradns"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        log::debug!(
            "[ultradns] API error code={:?} status={:?} zone={:?} account={:?}",
            raw.code,
            raw.status,
            context.zone,
            context.account
        );
        match (raw.code.as_deref(), raw.status) {
            // 60001: invalid_grant (bad username/password)
            // 60004: Authorization header required
            // 60005: invalid_token / expired
            (Some("60001" | "60004" | "60005"), _) | (None, Some(401)) => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // 60006: insufficient permissions
            (Some("60006"), _) | (None, Some(403)) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 1801: Zone does not exist in the system
            (Some("1801"), _) => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}
