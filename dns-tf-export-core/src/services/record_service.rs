//! Record set pagination

use std::sync::Arc;

use dns_tf_export_provider::{PageRequest, ProviderError, RecordSet, ZoneProvider};

use crate::error::{CoreError, CoreResult, ExportStage};

pub use crate::types::DEFAULT_PAGE_SIZE;

/// Position within a zone's record sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    pub zone: String,
    pub offset: u32,
    pub page_size: u32,
}

impl PaginationCursor {
    /// Cursor at offset 0.
    pub fn start(zone: &str, page_size: u32) -> Self {
        Self {
            zone: zone.to_string(),
            offset: 0,
            page_size,
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            offset: self.offset,
            limit: self.page_size,
        }
    }

    /// Move to the next page.
    fn advance(&mut self, provider: &str) -> CoreResult<()> {
        let next = self.request().next().ok_or_else(|| {
            CoreError::Provider(ProviderError::PaginationInconsistency {
                provider: provider.to_string(),
                zone: self.zone.clone(),
                offset: self.offset,
                limit: self.page_size,
                returned: self.page_size,
                detail: "offset overflow".to_string(),
            })
        })?;
        self.offset = next.offset;
        Ok(())
    }
}

/// Fetches every record set of a zone, one bounded page at a time.
pub struct RecordSetPaginator {
    provider: Arc<dyn ZoneProvider>,
    page_size: u32,
}

impl RecordSetPaginator {
    /// Create a paginator. `page_size` must be at least 1.
    pub fn new(provider: Arc<dyn ZoneProvider>, page_size: u32) -> CoreResult<Self> {
        if page_size == 0 {
            return Err(CoreError::Validation(
                "page size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            provider,
            page_size,
        })
    }

    /// All record sets of `zone`, in provider order.
    ///
    /// A full page means another page may follow, so a zone whose size is a multiple
    /// of the page size costs one extra request that comes back empty.
    pub async fn fetch_all(&self, zone: &str) -> CoreResult<Vec<RecordSet>> {
        let provider_id = self.provider.id();
        let mut cursor = PaginationCursor::start(zone, self.page_size);
        let mut records = Vec::new();

        loop {
            let request = cursor.request();
            log::debug!(
                "Fetching record sets of {zone} (offset {}, limit {})",
                request.offset,
                request.limit
            );

            let page = self
                .provider
                .list_record_sets(zone, &request)
                .await
                .map_err(|e| {
                    CoreError::in_zone(ExportStage::FetchRecords, zone, request.offset, e)
                })?;
            let returned = page.items.len();
            if returned > request.limit as usize {
                return Err(CoreError::Provider(ProviderError::PaginationInconsistency {
                    provider: provider_id.to_string(),
                    zone: zone.to_string(),
                    offset: request.offset,
                    limit: request.limit,
                    returned: u32::try_from(returned).unwrap_or(u32::MAX),
                    detail: "page is longer than the requested limit".to_string(),
                }));
            }

            if let Some(total) = page.total_count {
                log::debug!("{zone}: {returned} record sets at offset {} of {total}", request.offset);
            }
            let full = page.is_full();
            records.extend(page.items);
            if !full {
                break;
            }
            cursor.advance(provider_id)?;
        }

        Ok(records)
    }
}
