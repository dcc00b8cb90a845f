//! Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "ultradns")]
mod ultradns;

#[cfg(feature = "ultradns")]
pub use ultradns::{UltraDnsProvider, UltraDnsProviderBuilder};
