//! UltraDNS Provider

mod error;
mod http;
mod provider;
/// UltraDNS API-specific request/response types.
pub(crate) mod types;

use reqwest::Client;
use tokio::sync::OnceCell;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_base_url};

/// Public UltraDNS REST API endpoint.
pub(crate) const ULTRADNS_DEFAULT_HOST: &str = "restapi.ultradns.com";
/// Token endpoint, relative to the base URL.
pub(crate) const TOKEN_PATH: &str = "/v2/authorization/token";

/// UltraDNS provider implementation.
///
/// Authenticates with a username/password pair exchanged for a bearer token on
/// first use. The token is kept for the lifetime of the instance and never refreshed.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_tf_export_provider::UltraDnsProvider;
///
/// let provider = UltraDnsProvider::builder("user".to_string(), "secret".to_string())
///     .base_url("restapi.ultradns.com")
///     .build()?;
/// # Ok::<(), dns_tf_export_provider::ProviderError>(())
/// ```
pub struct UltraDnsProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) max_retries: u32,
    pub(crate) access_token: OnceCell<String>,
}

/// Builder for [`UltraDnsProvider`].
pub struct UltraDnsProviderBuilder {
    username: String,
    password: String,
    base_url: String,
    max_retries: u32,
}

impl UltraDnsProviderBuilder {
    fn new(username: String, password: String) -> Self {
        Self {
            username,
            password,
            base_url: normalize_base_url(ULTRADNS_DEFAULT_HOST),
            max_retries: 0,
        }
    }

    /// API host (`restapi.ultradns.com`) or full base URL (`https://host:port`).
    #[must_use]
    pub fn base_url(mut self, host_or_url: &str) -> Self {
        self.base_url = normalize_base_url(host_or_url);
        self
    }

    /// Maximum number of automatic retries for transient errors (default: 0).
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the [`UltraDnsProvider`] instance. No request is sent yet.
    pub fn build(self) -> Result<UltraDnsProvider> {
        Ok(UltraDnsProvider {
            client: create_http_client("ultradns")?,
            base_url: self.base_url,
            username: self.username,
            password: self.password,
            max_retries: self.max_retries,
            access_token: OnceCell::new(),
        })
    }
}

impl UltraDnsProvider {
    /// Creates a provider for the public endpoint with default settings.
    pub fn new(username: String, password: String) -> Result<Self> {
        Self::builder(username, password).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(username: String, password: String) -> UltraDnsProviderBuilder {
        UltraDnsProviderBuilder::new(username, password)
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
