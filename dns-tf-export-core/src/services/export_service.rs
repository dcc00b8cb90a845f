//! Account export: zones → record sets → artifacts

use std::sync::Arc;

use dns_tf_export_provider::ZoneProvider;

use crate::artifacts::DualArtifactWriter;
use crate::error::CoreResult;
use crate::identifier::ResourceIdentifier;
use crate::services::{RecordSetPaginator, ZoneService};
use crate::types::{ExportOptions, ExportSummary, ZoneSummary};

/// Exports one account to Terraform configuration and state
pub struct ExportService {
    provider: Arc<dyn ZoneProvider>,
    options: ExportOptions,
}

impl ExportService {
    /// Create an export service instance
    #[must_use]
    pub fn new(provider: Arc<dyn ZoneProvider>, options: ExportOptions) -> Self {
        Self { provider, options }
    }

    /// Run the export.
    ///
    /// Zones are processed one after the other, in provider order, and each zone's
    /// record sets in page order. Any error aborts the run before an artifact is
    /// replaced.
    pub async fn export(&self) -> CoreResult<ExportSummary> {
        self.options.validate()?;

        let zone_service = ZoneService::new(Arc::clone(&self.provider));
        let account = zone_service
            .resolve_account(self.options.account.as_deref())
            .await?;
        log::info!("Exporting account {account} via {}", self.provider.id());

        let zones = zone_service.list_zones(&account).await?;
        let paginator = RecordSetPaginator::new(Arc::clone(&self.provider), self.options.page_size)?;

        let lineage = self.options.lineage_or_new();
        let mut writer = DualArtifactWriter::create(&self.options, &lineage)?;
        log::debug!(
            "Writing artifacts to {}",
            self.options.output_dir.display()
        );

        let mut per_zone = Vec::with_capacity(zones.len());
        for zone in &zones {
            let records = paginator.fetch_all(&zone.name).await?;
            for record in &records {
                let identifier = ResourceIdentifier::synthesize(record, &zone.name)?;
                writer.emit(record, &identifier, &zone.name)?;
            }
            log::info!("Zone {}: {} record sets", zone.name, records.len());
            per_zone.push(ZoneSummary {
                zone: zone.name.clone(),
                records: records.len(),
            });
        }

        let records = writer.records();
        let artifacts = writer.finish()?;

        Ok(ExportSummary {
            account,
            zones: zones.len(),
            records,
            per_zone,
            lineage,
            artifacts,
        })
    }
}
