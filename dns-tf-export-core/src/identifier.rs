//! Resource identifiers shared by the configuration and the state document.

use std::fmt;

use dns_tf_export_provider::{ProviderError, RecordSet};
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Terraform resource type of every exported record set.
pub const RESOURCE_TYPE: &str = "ultradns_record";

/// Terraform resource name of one record set.
///
/// Built from the owner name, the zone name and the primary record type, so the same
/// triple always maps to the same identifier regardless of TTL or record data.
/// Two record sets sharing that triple collide; the writer rejects the second one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceIdentifier(String);

impl ResourceIdentifier {
    /// `sanitize(owner) + sanitize(zone) + primary type`, without separators.
    pub fn synthesize(record: &RecordSet, zone_name: &str) -> CoreResult<Self> {
        let primary_type = primary_type(record, zone_name)?;

        let mut id = sanitize(&record.owner_name);
        id.push_str(&sanitize(zone_name));
        id.push_str(primary_type);
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resource address, e.g. `ultradns_record.www_example_com_example_com_A`.
    pub fn address(&self) -> String {
        format!("{RESOURCE_TYPE}.{}", self.0)
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary record type of `record`; a blank `rrtype` is a malformed listing.
pub(crate) fn primary_type<'a>(record: &'a RecordSet, zone_name: &str) -> CoreResult<&'a str> {
    record.primary_type().ok_or_else(|| {
        CoreError::Provider(ProviderError::MalformedResponse {
            provider: "ultradns".to_string(),
            detail: format!(
                "record set '{}' in zone '{zone_name}' has no record type",
                record.owner_name
            ),
        })
    })
}

/// Replace every `.` and `*` with `_`. Nothing else is escaped.
pub fn sanitize(name: &str) -> String {
    name.replace(['.', '*'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(owner: &str, rrtype: &str, ttl: u32, rdata: &[&str]) -> RecordSet {
        RecordSet {
            owner_name: owner.to_string(),
            rrtype: rrtype.to_string(),
            ttl,
            rdata: rdata.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn sanitize_replaces_dots_and_stars() {
        assert_eq!(sanitize("*.example.com."), "__example_com_");
        assert_eq!(sanitize("plain"), "plain");
        assert_eq!(sanitize("a-b.c"), "a-b_c");
    }

    #[test]
    fn synthesize_concatenates_parts() {
        let id = ResourceIdentifier::synthesize(
            &record("www.example.com.", "A (1)", 300, &["192.0.2.1"]),
            "example.com.",
        )
        .unwrap();
        assert_eq!(id.as_str(), "www_example_com_example_com_A");
        assert_eq!(id.address(), "ultradns_record.www_example_com_example_com_A");
    }

    #[test]
    fn wildcard_owner() {
        let id = ResourceIdentifier::synthesize(
            &record("*.example.com.", "CNAME (5)", 60, &["example.com."]),
            "example.com.",
        )
        .unwrap();
        assert_eq!(id.as_str(), "__example_com_example_com_CNAME");
    }

    #[test]
    fn bare_type_without_qualifier() {
        let id = ResourceIdentifier::synthesize(
            &record("example.com.", "MX", 300, &["10 mail.example.com."]),
            "example.com.",
        )
        .unwrap();
        assert_eq!(id.as_str(), "example_com_example_com_MX");
    }

    #[test]
    fn ttl_and_rdata_do_not_affect_identifier() {
        let a = ResourceIdentifier::synthesize(
            &record("api.example.com.", "A (1)", 300, &["192.0.2.1"]),
            "example.com.",
        )
        .unwrap();
        let b = ResourceIdentifier::synthesize(
            &record("api.example.com.", "A (1)", 86400, &["198.51.100.7", "198.51.100.8"]),
            "example.com.",
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zone_is_part_of_identifier() {
        let rs = record("www.", "A", 300, &[]);
        let a = ResourceIdentifier::synthesize(&rs, "a.com.").unwrap();
        let b = ResourceIdentifier::synthesize(&rs, "b.com.").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn blank_type_is_malformed() {
        let err = ResourceIdentifier::synthesize(&record("www.example.com.", "  ", 300, &[]), "example.com.")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Provider(ProviderError::MalformedResponse { .. })
        ));
    }
}
