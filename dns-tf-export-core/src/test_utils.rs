//! Test helpers
//!
//! In-memory [`ZoneProvider`] and record factories.

use std::collections::HashMap;

use async_trait::async_trait;
use dns_tf_export_provider::{
    PageRequest, ProviderError, RecordSet, RecordSetPage, Result, Zone, ZoneProvider,
};
use tokio::sync::RwLock;

// ===== MockZoneProvider =====

/// Serves zones and record sets from memory and logs every page request.
pub struct MockZoneProvider {
    accounts: Vec<String>,
    zones: Vec<Zone>,
    records: HashMap<String, Vec<RecordSet>>,
    /// Return one item more than requested on full pages
    overfill: bool,
    requests: RwLock<Vec<(String, PageRequest)>>,
    account_lookups: RwLock<usize>,
    /// Error returned instead of a page, per zone and optionally per offset
    failures: RwLock<HashMap<(String, Option<u32>), ProviderError>>,
}

impl MockZoneProvider {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            zones: Vec::new(),
            records: HashMap::new(),
            overfill: false,
            requests: RwLock::new(Vec::new()),
            account_lookups: RwLock::new(0),
            failures: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_account(mut self, account: &str) -> Self {
        self.accounts.push(account.to_string());
        self
    }

    pub fn with_zone(mut self, zone: &str, records: Vec<RecordSet>) -> Self {
        self.zones.push(Zone::new(zone));
        self.records.insert(zone.to_string(), records);
        self
    }

    pub fn with_overfilled_pages(mut self) -> Self {
        self.overfill = true;
        self
    }

    /// Fail every page request of `zone`.
    pub async fn fail_zone(&self, zone: &str, err: ProviderError) {
        self.failures.write().await.insert((zone.to_string(), None), err);
    }

    /// Fail only the page of `zone` starting at `offset`.
    pub async fn fail_page(&self, zone: &str, offset: u32, err: ProviderError) {
        self.failures
            .write()
            .await
            .insert((zone.to_string(), Some(offset)), err);
    }

    /// Page requests issued for `zone`, in order.
    pub async fn requests(&self, zone: &str) -> Vec<PageRequest> {
        self.requests
            .read()
            .await
            .iter()
            .filter(|(z, _)| z == zone)
            .map(|(_, r)| *r)
            .collect()
    }

    pub async fn account_lookups(&self) -> usize {
        *self.account_lookups.read().await
    }
}

#[async_trait]
impl ZoneProvider for MockZoneProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn validate_credentials(&self) -> Result<bool> {
        Ok(true)
    }

    async fn primary_account(&self) -> Result<String> {
        *self.account_lookups.write().await += 1;
        self.accounts
            .first()
            .cloned()
            .ok_or_else(|| ProviderError::NoAccounts {
                provider: "mock".to_string(),
            })
    }

    async fn list_zones(&self, _account: &str) -> Result<Vec<Zone>> {
        Ok(self.zones.clone())
    }

    async fn list_record_sets(&self, zone: &str, page: &PageRequest) -> Result<RecordSetPage> {
        self.requests
            .write()
            .await
            .push((zone.to_string(), *page));

        {
            let failures = self.failures.read().await;
            let failure = failures
                .get(&(zone.to_string(), Some(page.offset)))
                .or_else(|| failures.get(&(zone.to_string(), None)));
            if let Some(err) = failure {
                return Err(err.clone());
            }
        }
        let all = self
            .records
            .get(zone)
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: "mock".to_string(),
                zone: zone.to_string(),
                raw_message: None,
            })?;

        let start = (page.offset as usize).min(all.len());
        let mut end = start.saturating_add(page.limit as usize).min(all.len());
        if self.overfill && end - start == page.limit as usize && end < all.len() {
            end += 1;
        }
        let items = all[start..end].to_vec();

        Ok(RecordSetPage {
            reported_count: u32::try_from(items.len()).ok(),
            total_count: u32::try_from(all.len()).ok(),
            items,
            offset: page.offset,
            limit: page.limit,
        })
    }
}

// ===== Factories =====

pub fn record(owner: &str, rrtype: &str, ttl: u32, rdata: &[&str]) -> RecordSet {
    RecordSet {
        owner_name: owner.to_string(),
        rrtype: rrtype.to_string(),
        ttl,
        rdata: rdata.iter().map(ToString::to_string).collect(),
    }
}

/// `count` distinct A records `r0.<zone>`, `r1.<zone>`, ...
pub fn records(zone: &str, count: usize) -> Vec<RecordSet> {
    (0..count)
        .map(|i| RecordSet {
            owner_name: format!("r{i}.{zone}"),
            rrtype: "A (1)".to_string(),
            ttl: 300,
            rdata: vec![format!("192.0.2.{}", i % 250)],
        })
        .collect()
}
