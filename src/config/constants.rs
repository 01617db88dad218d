//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the default DoH endpoint, timeouts, and TXT record markers.

/// Default DNS-over-HTTPS endpoint (Cloudflare JSON API).
pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

/// Media type requested from the DoH endpoint.
pub const DOH_JSON_CONTENT_TYPE: &str = "application/dns-json";

// Network operation timeouts
/// Per-query timeout in seconds.
/// Most DoH queries complete well under a second; an expired query is
/// reported as "no records", the same as any other transport failure.
pub const DNS_QUERY_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Default User-Agent string for DoH requests.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_check/", env!("CARGO_PKG_VERSION"));

/// Selector value that disables the DKIM lookup.
pub const DKIM_DEFAULT_SELECTOR: &str = "default";

/// Subdomain label under which DKIM keys are published.
pub const DKIM_DOMAIN_LABEL: &str = "_domainkey";

/// Subdomain label under which the DMARC policy is published.
pub const DMARC_DOMAIN_LABEL: &str = "_dmarc";

// TXT content markers, checked in this order
pub const SPF_MARKER: &str = "v=spf1";
pub const DKIM_MARKER: &str = "v=DKIM1;";
pub const DMARC_MARKER: &str = "v=DMARC1;";

/// Separator used when joining resolved addresses.
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Maximum length of a domain name in presentation format (RFC 1035).
pub const MAX_DOMAIN_LENGTH: usize = 253;
