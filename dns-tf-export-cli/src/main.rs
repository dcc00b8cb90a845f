//! UltraDNS → Terraform exporter
//!
//! Writes `ultradns.tf`, `terraform.tfstate` and `credentials.tf` describing every
//! record set of an UltraDNS account.
//!
//! # Usage
//! ```bash
//! dns-tf-export -u "$ULTRADNS_USERNAME" -p "$ULTRADNS_PASSWORD" -o ./terraform
//!
//! # keep the password out of credentials.tf
//! dns-tf-export --credentials env -o ./terraform
//! ```

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use dns_tf_export_core::{CoreError, ExportService, ExportSummary};
use dns_tf_export_provider::{UltraDnsProvider, ZoneProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout only carries the artifact paths
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match run(&cli).await {
        Ok(summary) => {
            tracing::info!(
                "Exported {} record sets from {} zones of account {}",
                summary.records,
                summary.zones,
                summary.account
            );
            println!("{}", summary.artifacts.config.display());
            println!("{}", summary.artifacts.state.display());
            if let Some(credentials) = &summary.artifacts.credentials {
                println!("{}", credentials.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let expected = e
                .downcast_ref::<CoreError>()
                .is_some_and(CoreError::is_expected);
            if expected {
                tracing::warn!("{e:#}");
            } else {
                tracing::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<ExportSummary> {
    let provider = UltraDnsProvider::builder(
        cli.rest_api_user.clone(),
        cli.rest_api_password.clone(),
    )
    .base_url(&cli.rest_api_url)
    .max_retries(cli.max_retries)
    .build()
    .context("failed to create the UltraDNS client")?;

    tracing::info!(
        "Connecting to {} as {}",
        provider.base_url(),
        cli.rest_api_user
    );
    let accepted = provider
        .validate_credentials()
        .await
        .map_err(CoreError::from)
        .context("authentication failed")?;
    if !accepted {
        bail!(
            "UltraDNS rejected the credentials of user {}",
            cli.rest_api_user
        );
    }

    let options = cli.export_options(provider.base_url());
    let output_dir = options.output_dir.display().to_string();
    let service = ExportService::new(Arc::new(provider), options);
    service
        .export()
        .await
        .with_context(|| format!("export to {output_dir} failed"))
}
