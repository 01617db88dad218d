//! The fixed query plan.

use crate::config::{DKIM_DOMAIN_LABEL, DMARC_DOMAIN_LABEL};
use crate::dns::{DnsRecordType, RecordLabel};

use super::types::LookupRequest;

/// Record types queried for every domain, in order.
pub const BASE_RECORD_TYPES: [DnsRecordType; 5] = [
    DnsRecordType::A,
    DnsRecordType::Mx,
    DnsRecordType::Ns,
    DnsRecordType::Cname,
    DnsRecordType::Txt,
];

/// What a query step looks up, which decides how its answers are labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    /// A record type of the domain itself
    Base,
    /// The DKIM key published under `selector`
    Dkim { selector: String },
    /// The DMARC policy at `_dmarc.<domain>`
    Dmarc,
}

/// One DNS query of the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStep {
    pub record_type: DnsRecordType,
    pub name: String,
    pub kind: StepKind,
}

impl QueryStep {
    /// Label used for this step when it has nothing to show.
    pub fn label(&self) -> RecordLabel {
        match self.kind {
            StepKind::Base => RecordLabel::Type(self.record_type),
            StepKind::Dkim { .. } => RecordLabel::Dkim,
            StepKind::Dmarc => RecordLabel::Dmarc,
        }
    }
}

/// Builds the ordered list of queries for `request`.
///
/// `[A, MX, NS, CNAME, TXT]` for the domain, then AAAA if requested, then the
/// DKIM selector TXT record if a selector is enabled, then the DMARC TXT
/// record.
pub fn build_query_plan(request: &LookupRequest) -> Vec<QueryStep> {
    let domain = request.domain.as_str();
    let mut plan: Vec<QueryStep> = BASE_RECORD_TYPES
        .iter()
        .map(|record_type| QueryStep {
            record_type: *record_type,
            name: domain.to_string(),
            kind: StepKind::Base,
        })
        .collect();

    if request.include_ipv6 {
        plan.push(QueryStep {
            record_type: DnsRecordType::Aaaa,
            name: domain.to_string(),
            kind: StepKind::Base,
        });
    }

    if let Some(selector) = request.effective_dkim_selector() {
        plan.push(QueryStep {
            record_type: DnsRecordType::Txt,
            name: format!("{selector}.{DKIM_DOMAIN_LABEL}.{domain}"),
            kind: StepKind::Dkim {
                selector: selector.to_string(),
            },
        });
    }

    plan.push(QueryStep {
        record_type: DnsRecordType::Txt,
        name: format!("{DMARC_DOMAIN_LABEL}.{domain}"),
        kind: StepKind::Dmarc,
    });

    plan
}
