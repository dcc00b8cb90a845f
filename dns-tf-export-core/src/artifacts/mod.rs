//! Generated Terraform artifacts
//!
//! Every record set becomes one `resource` block in the configuration document and one
//! entry in the state document. Both are fed from the same [`ResourceRecord`], so the
//! zone, owner name, type and TTL written to either side are the same values.

pub mod config_document;
pub mod credentials_document;
pub mod state_document;
pub mod writer;

use dns_tf_export_provider::RecordSet;

use crate::error::CoreResult;
use crate::identifier::{primary_type, ResourceIdentifier};

pub use config_document::ConfigDocument;
pub use state_document::StateDocument;
pub use writer::DualArtifactWriter;

/// Field values of one exported record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRecord<'a> {
    pub identifier: &'a ResourceIdentifier,
    pub zone: &'a str,
    pub name: &'a str,
    /// Primary record type, without qualifier.
    pub rtype: &'a str,
    pub ttl: u32,
    pub rdata: &'a [String],
}

impl<'a> ResourceRecord<'a> {
    pub fn new(
        record: &'a RecordSet,
        identifier: &'a ResourceIdentifier,
        zone: &'a str,
    ) -> CoreResult<Self> {
        let rtype = primary_type(record, zone)?;
        Ok(Self {
            identifier,
            zone,
            name: &record.owner_name,
            rtype,
            ttl: record.ttl,
            rdata: &record.rdata,
        })
    }
}
