//! UltraDNS `ZoneProvider` trait implementation

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::path_segment;
use crate::traits::{ErrorContext, ProviderErrorMapper, ZoneProvider};
use crate::types::{PageRequest, RecordSetPage, Zone};

use super::UltraDnsProvider;
use super::types::{AccountListResponse, RecordSetListResponse, ZoneListResponse};

impl UltraDnsProvider {
    /// Check a record-set listing against its own metadata and turn it into a page.
    pub(crate) fn check_page(
        &self,
        zone: &str,
        request: &PageRequest,
        response: RecordSetListResponse,
    ) -> Result<RecordSetPage> {
        let reported_count = response
            .result_info
            .as_ref()
            .and_then(|info| info.returned_count);
        let reported_offset = response.result_info.as_ref().and_then(|info| info.offset);
        let total_count = response.result_info.as_ref().and_then(|info| info.total_count);

        let items = match (response.rr_sets, reported_count) {
            (Some(items), _) => items,
            (None, Some(n)) if n > 0 => {
                return Err(self.malformed(format!(
                    "zone '{zone}' offset {}: resultInfo reports {n} record sets but rrSets is missing",
                    request.offset
                )));
            }
            (None, _) => Vec::new(),
        };

        let returned = u32::try_from(items.len()).unwrap_or(u32::MAX);
        if let Some(n) = reported_count
            && n != returned
        {
            return Err(ProviderError::PaginationInconsistency {
                provider: self.provider_name().to_string(),
                zone: zone.to_string(),
                offset: request.offset,
                limit: request.limit,
                returned,
                detail: format!("resultInfo.returnedCount is {n}"),
            });
        }
        if let Some(o) = reported_offset
            && o != request.offset
        {
            return Err(ProviderError::PaginationInconsistency {
                provider: self.provider_name().to_string(),
                zone: zone.to_string(),
                offset: request.offset,
                limit: request.limit,
                returned,
                detail: format!("resultInfo.offset is {o}"),
            });
        }

        Ok(RecordSetPage {
            items,
            offset: request.offset,
            limit: request.limit,
            reported_count,
            total_count,
        })
    }
}

#[async_trait]
impl ZoneProvider for UltraDnsProvider {
    fn id(&self) -> &'static str {
        "ultradns"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self.access_token().await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn primary_account(&self) -> Result<String> {
        let response: AccountListResponse = self
            .get("/v1/accounts", "", ErrorContext::default())
            .await?;

        response
            .accounts
            .into_iter()
            .next()
            .map(|a| a.account_name)
            .ok_or_else(|| ProviderError::NoAccounts {
                provider: self.provider_name().to_string(),
            })
    }

    async fn list_zones(&self, account: &str) -> Result<Vec<Zone>> {
        let path = format!("/v1/accounts/{}/zones", path_segment(account));
        let response: Option<ZoneListResponse> = self
            .get_listing(&path, "offset=0&reverse=true", ErrorContext::account(account))
            .await?;

        let zones: Vec<Zone> = response
            .map(|r| r.zones)
            .unwrap_or_default()
            .into_iter()
            .map(|z| Zone::new(z.properties.name))
            .collect();

        log::debug!("[ultradns] Account '{account}' has {} zones", zones.len());
        Ok(zones)
    }

    async fn list_record_sets(&self, zone: &str, page: &PageRequest) -> Result<RecordSetPage> {
        let path = format!("/v1/zones/{}/rrsets", path_segment(zone));
        let query = format!("limit={}&offset={}", page.limit, page.offset);

        let response: Option<RecordSetListResponse> = self
            .get_listing(&path, &query, ErrorContext::zone(zone))
            .await?;

        match response {
            Some(response) => self.check_page(zone, page, response),
            None => Ok(RecordSetPage::empty(page)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ultradns::types::ResultInfo;
    use crate::types::RecordSet;

    fn provider() -> UltraDnsProvider {
        UltraDnsProvider::new(String::new(), String::new()).unwrap()
    }

    fn record(owner: &str) -> RecordSet {
        RecordSet {
            owner_name: owner.to_string(),
            rrtype: "A (1)".to_string(),
            ttl: 300,
            rdata: vec!["192.0.2.1".to_string()],
        }
    }

    fn info(offset: u32, returned: Option<u32>) -> Option<ResultInfo> {
        Some(ResultInfo {
            total_count: Some(10),
            offset: Some(offset),
            returned_count: returned,
        })
    }

    #[test]
    fn missing_rrsets_without_metadata_is_empty_page() {
        let page = provider()
            .check_page(
                "a.com.",
                &PageRequest::first(10),
                RecordSetListResponse {
                    rr_sets: None,
                    result_info: None,
                },
            )
            .unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn missing_rrsets_with_positive_count_is_malformed() {
        let err = provider()
            .check_page(
                "a.com.",
                &PageRequest::first(10),
                RecordSetListResponse {
                    rr_sets: None,
                    result_info: info(0, Some(3)),
                },
            )
            .unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse { .. }));
    }

    #[test]
    fn count_mismatch_is_pagination_inconsistency() {
        let err = provider()
            .check_page(
                "a.com.",
                &PageRequest::first(10),
                RecordSetListResponse {
                    rr_sets: Some(vec![record("a.a.com."), record("b.a.com.")]),
                    result_info: info(0, Some(3)),
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::PaginationInconsistency { returned: 2, limit: 10, .. }
        ));
    }

    #[test]
    fn offset_mismatch_is_pagination_inconsistency() {
        let err = provider()
            .check_page(
                "a.com.",
                &PageRequest { offset: 20, limit: 10 },
                RecordSetListResponse {
                    rr_sets: Some(vec![record("a.a.com.")]),
                    result_info: info(0, Some(1)),
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::PaginationInconsistency { offset: 20, ref detail, .. }
                if detail.contains("offset is 0")
        ));
    }

    #[test]
    fn missing_offset_is_not_checked() {
        let page = provider()
            .check_page(
                "a.com.",
                &PageRequest { offset: 20, limit: 10 },
                RecordSetListResponse {
                    rr_sets: Some(vec![record("a.a.com.")]),
                    result_info: Some(ResultInfo {
                        total_count: None,
                        offset: None,
                        returned_count: Some(1),
                    }),
                },
            )
            .unwrap();
        assert_eq!(page.offset, 20);
    }

    #[test]
    fn consistent_page_keeps_order_and_counts() {
        let page = provider()
            .check_page(
                "a.com.",
                &PageRequest { offset: 10, limit: 10 },
                RecordSetListResponse {
                    rr_sets: Some(vec![record("b.a.com."), record("a.a.com.")]),
                    result_info: info(10, Some(2)),
                },
            )
            .unwrap();
        assert_eq!(page.offset, 10);
        assert_eq!(page.items[0].owner_name, "b.a.com.");
        assert_eq!(page.reported_count, Some(2));
        assert_eq!(page.total_count, Some(10));
    }
}
