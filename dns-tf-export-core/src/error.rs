//! Unified error type definition

use std::fmt;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dns_tf_export_provider::ProviderError;

/// Step of an export run that talks to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStage {
    ResolveAccount,
    ListZones,
    FetchRecords,
}

impl fmt::Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ResolveAccount => "resolve account",
            Self::ListZones => "list zones",
            Self::FetchRecords => "fetch records",
        })
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Provider error (converted from the client library)
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// Provider error together with the stage and position it interrupted.
    #[error(
        "{stage} failed{}: {source}",
        location(.account.as_deref(), .zone.as_deref(), .offset.as_ref())
    )]
    Stage {
        stage: ExportStage,
        account: Option<String>,
        zone: Option<String>,
        offset: Option<u32>,
        source: ProviderError,
    },

    /// Two record sets produced the same resource identifier.
    #[error("Identifier collision: '{identifier}' (owner {owner} in zone {zone}) was already emitted")]
    IdentifierCollision {
        identifier: String,
        zone: String,
        owner: String,
    },

    /// Filesystem error while writing artifacts
    #[error("I/O error on {path}: {detail}")]
    Io { path: String, detail: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The generated artifacts disagree with each other or do not parse.
    #[error("Artifact verification failed: {0}")]
    Verification(String),

    /// Invalid export options
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Account-level failure; `account` is `None` while it is still being discovered.
    pub(crate) fn in_account(
        stage: ExportStage,
        account: Option<&str>,
        source: ProviderError,
    ) -> Self {
        Self::Stage {
            stage,
            account: account.map(str::to_string),
            zone: None,
            offset: None,
            source,
        }
    }

    pub(crate) fn in_zone(
        stage: ExportStage,
        zone: &str,
        offset: u32,
        source: ProviderError,
    ) -> Self {
        Self::Stage {
            stage,
            account: None,
            zone: Some(zone.to_string()),
            offset: Some(offset),
            source,
        }
    }

    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            detail: err.to_string(),
        }
    }

    /// Whether the failure stems from user input or account contents rather than a fault;
    /// used for log classification.
    ///
    /// `warn` is used when this returns `true`, `error` otherwise.
    /// **Update this method whenever a variant is added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::IdentifierCollision { .. } => true,
            Self::Provider(e) | Self::Stage { source: e, .. } => e.is_expected(),
            Self::Io { .. } | Self::Serialization(_) | Self::Verification(_) => false,
        }
    }
}

fn location(account: Option<&str>, zone: Option<&str>, offset: Option<&u32>) -> String {
    let account = account.map(|a| format!(" for account {a}")).unwrap_or_default();
    let zone = zone.map(|z| format!(" in zone {z}")).unwrap_or_default();
    let offset = offset.map(|o| format!(" at offset {o}")).unwrap_or_default();
    format!("{account}{zone}{offset}")
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
