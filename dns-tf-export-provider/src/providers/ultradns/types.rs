//! UltraDNS REST API type definitions

use serde::Deserialize;
use serde_json::Value;

use crate::types::RecordSet;

// ============ Authorization ============

/// Response payload of the password grant on `/v2/authorization/token`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "accessToken", alias = "access_token")]
    pub access_token: String,
}

// ============ Accounts ============

/// Response payload of `GET /v1/accounts`.
#[derive(Debug, Deserialize)]
pub struct AccountListResponse {
    #[serde(default)]
    pub accounts: Vec<UltraDnsAccount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UltraDnsAccount {
    pub account_name: String,
}

// ============ Zones ============

/// Response payload of `GET /v1/accounts/{account}/zones`.
#[derive(Debug, Deserialize)]
pub struct ZoneListResponse {
    pub zones: Vec<UltraDnsZone>,
}

#[derive(Debug, Deserialize)]
pub struct UltraDnsZone {
    pub properties: ZoneProperties,
}

#[derive(Debug, Deserialize)]
pub struct ZoneProperties {
    pub name: String,
}

// ============ Record sets ============

/// Response payload of `GET /v1/zones/{zone}/rrsets`.
///
/// `rrSets` is left out entirely by the API when a page has no entries.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetListResponse {
    pub rr_sets: Option<Vec<RecordSet>>,
    pub result_info: Option<ResultInfo>,
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultInfo {
    pub total_count: Option<u32>,
    pub offset: Option<u32>,
    pub returned_count: Option<u32>,
}

// ============ Errors ============

/// Error payload; the API sends either a single object or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorResponse {
    List(Vec<ErrorBody>),
    Single(ErrorBody),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Numeric in most responses, occasionally a string.
    pub error_code: Option<Value>,
    pub error_message: Option<String>,
    /// OAuth style fields sent by the token endpoint.
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl ErrorResponse {
    /// First error of the payload as `(code, message)`.
    pub fn first(self) -> Option<(Option<String>, String)> {
        let body = match self {
            Self::List(list) => list.into_iter().next()?,
            Self::Single(body) => body,
        };
        let code = body.error_code.map(|c| match c {
            Value::String(s) => s,
            other => other.to_string(),
        });
        let message = body
            .error_message
            .or(body.error_description)
            .or(body.error)
            .unwrap_or_default();
        if code.is_none() && message.is_empty() {
            return None;
        }
        Some((code, message))
    }
}
