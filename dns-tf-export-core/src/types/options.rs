//! Export configuration.

use std::fmt;
use std::path::PathBuf;

use dns_tf_export_provider::log_sanitizer::mask_secret;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Record sets requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;
/// Tool version written into the state header when none is given.
pub const DEFAULT_TERRAFORM_VERSION: &str = "0.7.6";
/// Endpoint written into the provider block when none is given.
pub const DEFAULT_BASE_URL: &str = "https://restapi.ultradns.com";

/// How the API credentials end up in `credentials.tf`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialsMode {
    /// Username and password written as variable defaults.
    #[default]
    Plaintext,
    /// Variables declared without defaults; Terraform reads `TF_VAR_ultradns_*`.
    #[serde(rename = "env")]
    Environment,
    /// No credentials file.
    Skip,
}

/// Options for one export run.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Account to export. The user's first account when `None`.
    pub account: Option<String>,
    /// Record sets per page request.
    pub page_size: u32,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// `terraform_version` of the state header, written verbatim.
    pub terraform_version: String,
    /// State lineage. A fresh UUID v4 is generated when `None`.
    pub lineage: Option<String>,
    pub credentials_mode: CredentialsMode,
    /// API base URL, written as `baseurl` into the provider block.
    pub base_url: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            account: None,
            page_size: DEFAULT_PAGE_SIZE,
            output_dir: PathBuf::from("."),
            terraform_version: DEFAULT_TERRAFORM_VERSION.to_string(),
            lineage: None,
            credentials_mode: CredentialsMode::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for ExportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportOptions")
            .field("account", &self.account)
            .field("page_size", &self.page_size)
            .field("output_dir", &self.output_dir)
            .field("terraform_version", &self.terraform_version)
            .field("lineage", &self.lineage)
            .field("credentials_mode", &self.credentials_mode)
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &mask_secret(&self.password))
            .finish()
    }
}

impl ExportOptions {
    /// Reject options that cannot produce usable artifacts.
    pub fn validate(&self) -> CoreResult<()> {
        if self.page_size == 0 {
            return Err(CoreError::Validation(
                "page size must be at least 1".to_string(),
            ));
        }
        if self.terraform_version.trim().is_empty() {
            return Err(CoreError::Validation(
                "terraform version must not be empty".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(CoreError::Validation(
                "base URL must not be empty".to_string(),
            ));
        }
        if let Some(account) = &self.account {
            if account.trim().is_empty() {
                return Err(CoreError::Validation(
                    "account name must not be empty".to_string(),
                ));
            }
        }
        if let Some(lineage) = &self.lineage {
            uuid::Uuid::parse_str(lineage).map_err(|e| {
                CoreError::Validation(format!("lineage '{lineage}' is not a UUID: {e}"))
            })?;
        }
        Ok(())
    }

    /// Configured lineage, or a new random one.
    pub(crate) fn lineage_or_new(&self) -> String {
        self.lineage
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }
}
