//! domain_check library: DNS diagnostics over DNS-over-HTTPS
//!
//! Given a domain, this library queries its A, MX, NS, CNAME and TXT records
//! (optionally AAAA, a DKIM selector and always the DMARC policy) through a
//! DoH JSON endpoint, labels SPF/DKIM/DMARC TXT content, resolves MX and NS
//! hosts to their addresses, and returns everything in a fixed order.
//!
//! # Example
//!
//! ```no_run
//! use domain_check::{run_diagnostics, Config, DohClient, LookupRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DohClient::from_config(&Config::default())?;
//! let request = LookupRequest::new("example.com").with_dkim_selector("google");
//!
//! let outcome = run_diagnostics(&client, &request).await;
//! print!("{}", domain_check::report::render_text(&outcome));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! `DohClient` requires a Tokio runtime. Any other transport can be plugged in
//! by implementing `DnsQuery`.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod report;

#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, MissingRecordPolicy, OutputFormat};
pub use diagnostics::{
    run_diagnostics, ClassifiedRecord, Diagnostics, LookupOutcome, LookupRequest, NoRecordFound,
    OutcomeEntry,
};
pub use dns::{classify, DnsQuery, DnsRecordType, DohClient, RawRecord, RecordKind, RecordLabel};
pub use error_handling::{InitializationError, LookupRequestError};
