//! Type definitions

mod export;
mod options;

pub use export::{ArtifactPaths, ExportSummary, ZoneSummary};
pub use options::{
    CredentialsMode, ExportOptions, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TERRAFORM_VERSION,
};

// Re-export provider library types
pub use dns_tf_export_provider::{PageRequest, RecordSet, RecordSetPage, Zone};
