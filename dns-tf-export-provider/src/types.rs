use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Offset/limit pair for a single record-set page request.
///
/// # Default
///
/// The default is `offset = 0, limit = 1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based index of the first item of the page.
    pub offset: u32,
    /// Maximum number of items per page.
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(1000)
    }
}

impl PageRequest {
    /// The first page for the given page size.
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// The page immediately following this one, or `None` once the offset would
    /// no longer fit in a `u32`.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Some(Self {
            offset: self.offset.checked_add(self.limit)?,
            limit: self.limit,
        })
    }
}

/// One page of record sets as returned by [`ZoneProvider::list_record_sets`](crate::ZoneProvider::list_record_sets).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetPage {
    /// Record sets on this page, in provider order.
    pub items: Vec<RecordSet>,
    /// Offset that was requested.
    pub offset: u32,
    /// Limit that was requested.
    pub limit: u32,
    /// Page length as reported by the provider, if it reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_count: Option<u32>,
    /// Total number of record sets in the zone, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

impl RecordSetPage {
    /// An empty page for the given request.
    pub fn empty(request: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            offset: request.offset,
            limit: request.limit,
            reported_count: Some(0),
            total_count: None,
        }
    }

    /// Whether the page was filled up to its limit, meaning another page may follow.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit as usize
    }
}

// ============ Zone Types ============

/// A DNS zone owned by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Fully qualified zone name as reported by the provider (e.g. `"example.com."`).
    pub name: String,
}

impl Zone {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============ Record Types ============

/// One DNS record set: owner name, type, TTL and value(s).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    /// Owner name, usually fully qualified with a trailing dot.
    pub owner_name: String,
    /// Record type, possibly qualified with a trailing annotation (e.g. `"A (1)"`).
    pub rrtype: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Record values, in provider order.
    #[serde(default)]
    pub rdata: Vec<String>,
}

impl RecordSet {
    /// Bare record type: the part of `rrtype` before the first whitespace.
    ///
    /// Returns `None` if `rrtype` is blank.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.rrtype.split_whitespace().next()
    }
}
