//! Account and zone enumeration

use std::sync::Arc;

use dns_tf_export_provider::{ProviderError, Zone, ZoneProvider};

use crate::error::{CoreError, CoreResult, ExportStage};

/// Account and zone enumeration service
pub struct ZoneService {
    provider: Arc<dyn ZoneProvider>,
}

impl ZoneService {
    /// Create a zone service instance
    #[must_use]
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self { provider }
    }

    /// The explicitly requested account, or the first account of the user.
    pub async fn resolve_account(&self, explicit: Option<&str>) -> CoreResult<String> {
        match explicit.map(str::trim) {
            Some("") => Err(CoreError::Validation(
                "account name must not be empty".to_string(),
            )),
            Some(account) => Ok(account.to_string()),
            None => {
                let account = self
                    .provider
                    .primary_account()
                    .await
                    .map_err(|e| CoreError::in_account(ExportStage::ResolveAccount, None, e))?;
                log::debug!("Using primary account {account}");
                Ok(account)
            }
        }
    }

    /// All zones of `account`, in provider order.
    ///
    /// An account without zones is an error: there is nothing to export.
    pub async fn list_zones(&self, account: &str) -> CoreResult<Vec<Zone>> {
        let zones = self
            .provider
            .list_zones(account)
            .await
            .map_err(|e| CoreError::in_account(ExportStage::ListZones, Some(account), e))?;
        if zones.is_empty() {
            return Err(CoreError::Provider(ProviderError::NoZones {
                provider: self.provider.id().to_string(),
                account: account.to_string(),
            }));
        }
        log::info!("Account {account} has {} zones", zones.len());
        Ok(zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockZoneProvider;

    #[tokio::test]
    async fn explicit_account_skips_discovery() {
        let mock = Arc::new(MockZoneProvider::new().with_account("discovered"));
        let service = ZoneService::new(mock.clone());

        let account = service.resolve_account(Some(" acme ")).await.unwrap();
        assert_eq!(account, "acme");
        assert_eq!(mock.account_lookups().await, 0);
    }

    #[tokio::test]
    async fn primary_account_is_discovered() {
        let mock = Arc::new(MockZoneProvider::new().with_account("acme"));
        let service = ZoneService::new(mock.clone());

        assert_eq!(service.resolve_account(None).await.unwrap(), "acme");
        assert_eq!(mock.account_lookups().await, 1);
    }

    #[tokio::test]
    async fn no_accounts_is_propagated() {
        let service = ZoneService::new(Arc::new(MockZoneProvider::new()));
        let err = service.resolve_account(None).await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Stage {
                stage: ExportStage::ResolveAccount,
                account: None,
                source: ProviderError::NoAccounts { .. },
                ..
            }
        ));
        assert!(err.is_expected());
    }

    #[tokio::test]
    async fn zones_keep_provider_order() {
        let mock = MockZoneProvider::new()
            .with_zone("zeta.com.", Vec::new())
            .with_zone("alpha.com.", Vec::new());
        let service = ZoneService::new(Arc::new(mock));

        let zones = service.list_zones("acme").await.unwrap();
        let names: Vec<_> = zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["zeta.com.", "alpha.com."]);
    }

    #[tokio::test]
    async fn empty_account_is_no_zones() {
        let service = ZoneService::new(Arc::new(MockZoneProvider::new()));
        let err = service.list_zones("acme").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::NoZones { ref account, .. }) if account == "acme"
        ));
        assert!(err.is_expected());
    }
}
