//! `terraform.tfstate`: version 1 state snapshot of the exported resources.
//!
//! Entries are collected in emission order and serialised once, so the document is
//! well formed for any number of zones and records, including none.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::ResourceRecord;

/// Format version of the state layout produced here.
pub const STATE_VERSION: u32 = 1;

/// Attributes of one resource, flat-mapped to strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateAttributes {
    pub zone: String,
    pub id: String,
    pub ttl: String,
    #[serde(rename = "type")]
    pub rtype: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryInstance {
    pub id: String,
    pub attributes: StateAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateResource {
    pub depends_on: Vec<String>,
    pub primary: PrimaryInstance,
}

impl StateResource {
    fn from_record(record: &ResourceRecord<'_>) -> Self {
        let id = record.identifier.as_str().to_string();
        Self {
            depends_on: Vec::new(),
            primary: PrimaryInstance {
                id: id.clone(),
                attributes: StateAttributes {
                    zone: record.zone.to_string(),
                    id,
                    ttl: record.ttl.to_string(),
                    rtype: record.rtype.to_string(),
                    name: record.name.to_string(),
                },
            },
        }
    }
}

/// Resource map that serialises in insertion order.
struct Resources<'a>(&'a [(String, StateResource)]);

impl Serialize for Resources<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (address, resource) in self.0 {
            map.serialize_entry(address, resource)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct Module<'a> {
    path: [&'static str; 1],
    outputs: serde_json::Map<String, serde_json::Value>,
    resources: Resources<'a>,
    depends_on: [&'static str; 0],
}

#[derive(Serialize)]
struct Document<'a> {
    version: u32,
    terraform_version: &'a str,
    serial: u32,
    lineage: &'a str,
    modules: [Module<'a>; 1],
}

/// State snapshot under construction.
#[derive(Debug, Clone)]
pub struct StateDocument {
    terraform_version: String,
    lineage: String,
    resources: Vec<(String, StateResource)>,
}

impl StateDocument {
    pub fn new(terraform_version: &str, lineage: &str) -> Self {
        Self {
            terraform_version: terraform_version.to_string(),
            lineage: lineage.to_string(),
            resources: Vec::new(),
        }
    }

    /// Append the entry for one record set, keyed by its resource address.
    pub fn push(&mut self, record: &ResourceRecord<'_>) {
        self.resources.push((
            record.identifier.address(),
            StateResource::from_record(record),
        ));
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Pretty-printed JSON document with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let document = Document {
            version: STATE_VERSION,
            terraform_version: &self.terraform_version,
            serial: 1,
            lineage: &self.lineage,
            modules: [Module {
                path: ["root"],
                outputs: serde_json::Map::new(),
                resources: Resources(&self.resources),
                depends_on: [],
            }],
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::identifier::ResourceIdentifier;
    use crate::test_utils::record;

    const LINEAGE: &str = "587c86b1-8331-48da-b591-5d19c961a7af";

    fn parse(doc: &StateDocument) -> Value {
        serde_json::from_str(&doc.to_json().unwrap()).unwrap()
    }

    fn push(doc: &mut StateDocument, zone: &str, rs: &dns_tf_export_provider::RecordSet) {
        let id = ResourceIdentifier::synthesize(rs, zone).unwrap();
        doc.push(&ResourceRecord::new(rs, &id, zone).unwrap());
    }

    #[test]
    fn empty_document_is_valid() {
        let doc = StateDocument::new("0.7.6", LINEAGE);
        assert!(doc.is_empty());
        assert_eq!(
            parse(&doc),
            json!({
                "version": 1,
                "terraform_version": "0.7.6",
                "serial": 1,
                "lineage": LINEAGE,
                "modules": [{
                    "path": ["root"],
                    "outputs": {},
                    "resources": {},
                    "depends_on": []
                }]
            })
        );
    }

    #[test]
    fn single_entry_shape() {
        let mut doc = StateDocument::new("0.7.6", LINEAGE);
        push(
            &mut doc,
            "example.com.",
            &record("www.example.com.", "A (1)", 300, &["192.0.2.1"]),
        );

        let value = parse(&doc);
        let resources = value["modules"][0]["resources"].as_object().unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(
            resources["ultradns_record.www_example_com_example_com_A"],
            json!({
                "depends_on": [],
                "primary": {
                    "id": "www_example_com_example_com_A",
                    "attributes": {
                        "zone": "example.com.",
                        "id": "www_example_com_example_com_A",
                        "ttl": "300",
                        "type": "A",
                        "name": "www.example.com."
                    }
                }
            })
        );
    }

    #[test]
    fn no_trailing_separator_after_last_entry() {
        let mut doc = StateDocument::new("0.7.6", LINEAGE);
        push(&mut doc, "a.com.", &record("x.a.com.", "A", 60, &["192.0.2.9"]));

        let text = doc.to_json().unwrap();
        assert!(!text.contains(",\n    }"));
        assert!(!text.contains("},\n      }"));
        assert!(serde_json::from_str::<Value>(&text).is_ok());
    }

    #[test]
    fn entries_keep_emission_order() {
        let mut doc = StateDocument::new("0.7.6", LINEAGE);
        push(&mut doc, "z.com.", &record("b.z.com.", "A", 60, &[]));
        push(&mut doc, "z.com.", &record("a.z.com.", "A", 60, &[]));

        let text = doc.to_json().unwrap();
        let b = text.find("ultradns_record.b_z_com_z_com_A").unwrap();
        let a = text.find("ultradns_record.a_z_com_z_com_A").unwrap();
        assert!(b < a);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn header_carries_version_verbatim() {
        let doc = StateDocument::new("0.11.14-custom", LINEAGE);
        assert_eq!(parse(&doc)["terraform_version"], "0.11.14-custom");
        assert_eq!(parse(&doc)["lineage"], LINEAGE);
    }
}
