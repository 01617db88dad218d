//! Request and outcome types for diagnostics.

use serde::Serialize;

use crate::config::{ADDRESS_SEPARATOR, DKIM_DEFAULT_SELECTOR};
use crate::dns::{DnsRecordType, RecordLabel};

/// Input to a diagnostics run.
///
/// `domain` is expected to be trimmed and validated already (see
/// `validate_domain`).
///
/// # Examples
///
/// ```
/// use domain_check::LookupRequest;
///
/// let request = LookupRequest::new("example.com")
///     .with_dkim_selector("google")
///     .with_ipv6(true);
/// assert_eq!(request.effective_dkim_selector(), Some("google"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    pub domain: String,
    pub dkim_selector: Option<String>,
    pub include_ipv6: bool,
}

impl LookupRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            dkim_selector: None,
            include_ipv6: false,
        }
    }

    pub fn with_dkim_selector(mut self, selector: impl Into<String>) -> Self {
        self.dkim_selector = Some(selector.into());
        self
    }

    pub fn with_ipv6(mut self, include_ipv6: bool) -> Self {
        self.include_ipv6 = include_ipv6;
        self
    }

    /// The selector to query, if the DKIM lookup is enabled.
    ///
    /// Absent, blank, and `"default"` selectors disable the lookup.
    pub fn effective_dkim_selector(&self) -> Option<&str> {
        self.dkim_selector
            .as_deref()
            .map(str::trim)
            .filter(|selector| !selector.is_empty() && *selector != DKIM_DEFAULT_SELECTOR)
    }
}

/// One answer record, labelled and annotated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedRecord {
    /// Domain the diagnostics ran for
    pub domain: String,
    /// Record type that was queried
    pub query_type: DnsRecordType,
    /// Name that was queried (differs from `domain` for DKIM and DMARC)
    pub queried_name: String,
    pub label: RecordLabel,
    /// Record data as returned by the resolver, unchanged
    pub value: String,
    /// IPv4 addresses of the host named by an MX/NS record
    pub resolved_addresses: Vec<String>,
}

impl ClassifiedRecord {
    /// Resolved addresses joined with `", "`.
    pub fn resolved_addresses_joined(&self) -> String {
        self.resolved_addresses.join(ADDRESS_SEPARATOR)
    }

    /// Whether this record was annotated with addresses (MX/NS).
    pub fn carries_addresses(&self) -> bool {
        self.query_type.is_hostname_bearing()
    }
}

/// A query step that came back empty and is reported explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoRecordFound {
    pub label: RecordLabel,
    pub domain: String,
    pub queried_name: String,
    /// Human-readable explanation, e.g. `No DKIM record found for selector "s1"`
    pub reason: String,
}

/// One entry of a diagnostics outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeEntry {
    Record(ClassifiedRecord),
    NotFound(NoRecordFound),
}

impl OutcomeEntry {
    pub fn label(&self) -> RecordLabel {
        match self {
            OutcomeEntry::Record(record) => record.label,
            OutcomeEntry::NotFound(missing) => missing.label,
        }
    }

    pub fn as_record(&self) -> Option<&ClassifiedRecord> {
        match self {
            OutcomeEntry::Record(record) => Some(record),
            OutcomeEntry::NotFound(_) => None,
        }
    }
}

/// Ordered result of a diagnostics run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOutcome {
    pub request: LookupRequest,
    pub entries: Vec<OutcomeEntry>,
}

impl LookupOutcome {
    pub fn new(request: LookupRequest) -> Self {
        Self {
            request,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: OutcomeEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutcomeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records only, in outcome order.
    pub fn records(&self) -> impl Iterator<Item = &ClassifiedRecord> {
        self.entries.iter().filter_map(OutcomeEntry::as_record)
    }

    /// Not-found entries only, in outcome order.
    pub fn not_found(&self) -> impl Iterator<Item = &NoRecordFound> {
        self.entries.iter().filter_map(|entry| match entry {
            OutcomeEntry::NotFound(missing) => Some(missing),
            OutcomeEntry::Record(_) => None,
        })
    }
}

impl<'a> IntoIterator for &'a LookupOutcome {
    type Item = &'a OutcomeEntry;
    type IntoIter = std::slice::Iter<'a, OutcomeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
