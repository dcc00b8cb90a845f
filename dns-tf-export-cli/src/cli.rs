//! Command line definition

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dns_tf_export_core::types::{DEFAULT_PAGE_SIZE, DEFAULT_TERRAFORM_VERSION};
use dns_tf_export_core::{CredentialsMode, ExportOptions};

/// Where the API credentials go in `credentials.tf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CredentialsArg {
    /// Write username and password as variable defaults
    Plaintext,
    /// Declare the variables only; set TF_VAR_ultradns_username/TF_VAR_ultradns_password
    Env,
    /// Do not write credentials.tf
    Skip,
}

impl From<CredentialsArg> for CredentialsMode {
    fn from(arg: CredentialsArg) -> Self {
        match arg {
            CredentialsArg::Plaintext => Self::Plaintext,
            CredentialsArg::Env => Self::Environment,
            CredentialsArg::Skip => Self::Skip,
        }
    }
}

#[derive(Parser)]
#[command(name = "dns-tf-export")]
#[command(
    about = "Generate a Terraform config and state file from the zones of an UltraDNS account",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// REST API host or base URL
    #[arg(
        short = 'a',
        long,
        env = "ULTRADNS_API_URL",
        default_value = "restapi.ultradns.com"
    )]
    pub rest_api_url: String,

    /// User used to connect to the UltraDNS API
    #[arg(short = 'u', long, env = "ULTRADNS_USERNAME")]
    pub rest_api_user: String,

    /// Password used to connect to the UltraDNS API
    #[arg(short = 'p', long, env = "ULTRADNS_PASSWORD", hide_env_values = true)]
    pub rest_api_password: String,

    /// Terraform version written into terraform.tfstate
    #[arg(short = 't', long, default_value = DEFAULT_TERRAFORM_VERSION)]
    pub terraform_version: String,

    /// Account to export (default: the user's first account)
    #[arg(long, env = "ULTRADNS_ACCOUNT")]
    pub account: Option<String>,

    /// Record sets requested per page
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page_size: u32,

    /// Directory the artifacts are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// How credentials are written to credentials.tf
    #[arg(long, value_enum, default_value_t = CredentialsArg::Plaintext)]
    pub credentials: CredentialsArg,

    /// State lineage UUID (default: a new random one)
    #[arg(long)]
    pub lineage: Option<String>,

    /// Retries for transient API failures
    #[arg(long, default_value_t = 0)]
    pub max_retries: u32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Export options for a provider reachable at `base_url`.
    pub fn export_options(&self, base_url: &str) -> ExportOptions {
        ExportOptions {
            account: self.account.clone(),
            page_size: self.page_size,
            output_dir: self.output_dir.clone(),
            terraform_version: self.terraform_version.clone(),
            lineage: self.lineage.clone(),
            credentials_mode: self.credentials.into(),
            base_url: base_url.to_string(),
            username: self.rest_api_user.clone(),
            password: self.rest_api_password.clone(),
        }
    }
}
