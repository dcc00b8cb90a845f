//! Export result types.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::CredentialsMode;

/// Locations of the generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPaths {
    /// Resource configuration (`ultradns.tf`).
    pub config: PathBuf,
    /// State snapshot (`terraform.tfstate`).
    pub state: PathBuf,
    /// Credential variables (`credentials.tf`), absent with [`CredentialsMode::Skip`].
    pub credentials: Option<PathBuf>,
}

impl ArtifactPaths {
    pub const CONFIG_FILE: &'static str = "ultradns.tf";
    pub const STATE_FILE: &'static str = "terraform.tfstate";
    pub const CREDENTIALS_FILE: &'static str = "credentials.tf";

    /// Artifact paths inside `dir`.
    pub fn in_dir(dir: &Path, credentials: CredentialsMode) -> Self {
        Self {
            config: dir.join(Self::CONFIG_FILE),
            state: dir.join(Self::STATE_FILE),
            credentials: (credentials != CredentialsMode::Skip)
                .then(|| dir.join(Self::CREDENTIALS_FILE)),
        }
    }
}

/// Record sets exported from one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneSummary {
    pub zone: String,
    pub records: usize,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    /// Exported account
    pub account: String,
    /// Number of zones
    pub zones: usize,
    /// Number of record sets across all zones
    pub records: usize,
    /// Per-zone record counts, in export order
    pub per_zone: Vec<ZoneSummary>,
    /// Lineage written into the state
    pub lineage: String,
    pub artifacts: ArtifactPaths,
}
