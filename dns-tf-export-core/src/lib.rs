//! DNS-to-Terraform export core
//!
//! Walks every zone of a DNS provider account, pages through its record sets and
//! writes two artifacts describing the same resources:
//! - `ultradns.tf`: a provider block and one `ultradns_record` resource per record set
//! - `terraform.tfstate`: the matching state snapshot
//!
//! plus an optional `credentials.tf` with the variables the provider block references.
//!
//! The provider is reached through the [`ZoneProvider`](dns_tf_export_provider::ZoneProvider)
//! trait, so the services run unchanged against the real client or an in-memory double.

pub mod artifacts;
pub mod error;
pub mod identifier;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ExportStage};
pub use identifier::ResourceIdentifier;
pub use services::{ExportService, RecordSetPaginator, ZoneService};
pub use types::{ArtifactPaths, CredentialsMode, ExportOptions, ExportSummary};
