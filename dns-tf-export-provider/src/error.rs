use serde::{Deserialize, Serialize};

/// Unified error type for all provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): API rate limit exceeded
///
/// The built-in HTTP client only retries these when a retry budget has been configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The username/password pair was rejected, or the session token is invalid.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated user does not belong to any account.
    NoAccounts {
        /// Provider that produced the error.
        provider: String,
    },

    /// The account exists but owns no zones.
    NoZones {
        /// Provider that produced the error.
        provider: String,
        /// Account whose zone list came back empty.
        account: String,
    },

    /// The specified zone was not found.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that was not found.
        zone: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A provider response was missing an expected key or carried a value of the wrong type.
    MalformedResponse {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A page did not line up with the request that produced it.
    ///
    /// Raised when a page is longer than the requested limit, or when the
    /// provider-reported page length disagrees with the number of items returned.
    PaginationInconsistency {
        /// Provider that produced the error.
        provider: String,
        /// Zone being paged through.
        zone: String,
        /// Offset of the offending page.
        offset: u32,
        /// Requested page size.
        limit: u32,
        /// Number of items actually returned.
        returned: u32,
        /// What was inconsistent.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error is caused by user input or account contents rather than a fault,
    /// used to pick the log level.
    ///
    /// Returns `true` when `warn` is appropriate, `false` for `error`.
    /// **Update this method whenever a variant is added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::NoAccounts { .. }
                | Self::NoZones { .. }
                | Self::ZoneNotFound { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::NoAccounts { provider } => {
                write!(f, "[{provider}] No account is associated with this user")
            }
            Self::NoZones { provider, account } => {
                write!(f, "[{provider}] Account '{account}' has no zones")
            }
            Self::ZoneNotFound {
                provider,
                zone,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{zone}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{zone}' not found")
                }
            }
            Self::MalformedResponse { provider, detail } => {
                write!(f, "[{provider}] Malformed response: {detail}")
            }
            Self::PaginationInconsistency {
                provider,
                zone,
                offset,
                limit,
                returned,
                detail,
            } => {
                write!(
                    f,
                    "[{provider}] Inconsistent page for zone '{zone}' at offset {offset} \
                     (limit {limit}, returned {returned}): {detail}"
                )
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
