//! # dns-tf-export-provider
//!
//! Read-only client for DNS provider accounts: enumerate the zones of an account
//! and page through their record sets.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [UltraDNS](https://www.ultradns.com/) | `ultradns` | Username/password → bearer token |
//!
//! ## Feature Flags
//!
//! - **`ultradns`** *(default)*: Enable the UltraDNS provider.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static or cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_tf_export_provider::{PageRequest, UltraDnsProvider, ZoneProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = UltraDnsProvider::builder("user".into(), "secret".into()).build()?;
//!
//!     let account = provider.primary_account().await?;
//!     for zone in provider.list_zones(&account).await? {
//!         let page = provider
//!             .list_record_sets(&zone.name, &PageRequest::first(1000))
//!             .await?;
//!         for rs in &page.items {
//!             println!("{} {} {} {:?}", rs.owner_name, rs.rrtype, rs.ttl, rs.rdata);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`]: transport failure
//! - [`ProviderError::MalformedResponse`]: a response lacked an expected key or had the wrong shape
//! - [`ProviderError::PaginationInconsistency`]: a page did not match its request or its own metadata
//!
//! Transient errors are only retried when a retry budget is configured on the provider.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use traits::ZoneProvider;

pub use types::{PageRequest, RecordSet, RecordSetPage, Zone};

pub use utils::log_sanitizer;

#[cfg(feature = "ultradns")]
pub use providers::{UltraDnsProvider, UltraDnsProviderBuilder};
