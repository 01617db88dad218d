//! DNS-over-HTTPS queries and record interpretation.
//!
//! This module provides:
//! - Record type definitions (the closed set of types the diagnostics query)
//! - The `DnsQuery` seam and its DoH implementation (`DohClient`)
//! - TXT content classification (SPF, DKIM, DMARC)
//! - Secondary resolution of MX/NS hostnames to IPv4 addresses
//!
//! Queries never fail from the caller's point of view: transport and decode
//! errors are logged, counted, and reported as an empty answer.

mod classify;
mod client;
mod record_type;
mod resolution;

// Re-export public API
pub use classify::classify;
pub use client::{DnsQuery, DohClient};
pub use record_type::{DnsRecordType, RawRecord, RecordKind, RecordLabel};
pub use resolution::{extract_hostname, resolve_hostname_addresses, resolve_hostname_record};
