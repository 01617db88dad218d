//! Secondary resolution of hostname-bearing records.
//!
//! MX and NS records name hosts; the diagnostics annotate them with the
//! IPv4 addresses those hosts resolve to.

use log::debug;

use crate::config::ADDRESS_SEPARATOR;

use super::client::DnsQuery;
use super::record_type::{DnsRecordType, RecordKind};

/// Extracts the hostname from an MX or NS record value.
///
/// MX values carry a leading preference (`"10 mail.example.com."`); the
/// hostname is the last whitespace-delimited token. Values without
/// whitespace are returned trimmed.
pub fn extract_hostname(value: &str) -> &str {
    value.split_whitespace().last().unwrap_or("")
}

/// Resolves the host named by an MX/NS record value to its IPv4 addresses.
///
/// Only A entries of the answer are returned, in answer order; CNAME entries
/// on the way to the address are skipped. Lookup failures yield an empty
/// list.
pub async fn resolve_hostname_addresses<Q: DnsQuery>(client: &Q, value: &str) -> Vec<String> {
    let hostname = extract_hostname(value);
    if hostname.is_empty() {
        debug!("No hostname in record value {value:?}, skipping address lookup");
        return Vec::new();
    }

    client
        .query(DnsRecordType::A, hostname)
        .await
        .into_iter()
        .filter(|record| record.record_type == RecordKind::Known(DnsRecordType::A))
        .map(|record| record.data)
        .collect()
}

/// Resolves the host named by an MX/NS record value to a comma-separated
/// address list.
///
/// # Returns
///
/// Addresses joined with `", "`, or an empty string when none were found.
pub async fn resolve_hostname_record<Q: DnsQuery>(client: &Q, value: &str) -> String {
    resolve_hostname_addresses(client, value)
        .await
        .join(ADDRESS_SEPARATOR)
}
