//! DNS-over-HTTPS query client.
//!
//! Speaks the JSON flavour of DoH (`application/dns-json`) offered by
//! Cloudflare, Google and most public resolvers: a GET with `name` and
//! `type` parameters answered by a JSON document whose `Answer` array lists
//! the records.

use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};
use serde::Deserialize;
use url::Url;

use crate::config::{Config, DOH_JSON_CONTENT_TYPE};
use crate::error_handling::{categorize_doh_error, DohError, InitializationError, QueryStats};
use crate::initialization::{init_client, parse_endpoint};

use super::record_type::{DnsRecordType, RawRecord, RecordKind};

/// Issues a single DNS query.
///
/// Implementations must not fail: anything that prevents an answer is
/// reported as an empty record list.
pub trait DnsQuery {
    /// Queries `record_type` records for `name`, preserving answer order.
    fn query(
        &self,
        record_type: DnsRecordType,
        name: &str,
    ) -> impl Future<Output = Vec<RawRecord>> + Send;
}

/// DNS JSON response body. Only the fields the diagnostics use are decoded.
#[derive(Debug, Deserialize)]
struct DohResponse {
    /// DNS response code (0 = NOERROR, 3 = NXDOMAIN)
    #[serde(rename = "Status", default)]
    status: Option<u16>,
    /// Answer section, absent when there are no records
    #[serde(rename = "Answer", default)]
    answer: Option<Vec<DohAnswer>>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "type")]
    rtype: u16,
    data: String,
}

/// `DnsQuery` over a DoH JSON endpoint.
///
/// Cloning is cheap; clones share the HTTP client and statistics.
#[derive(Debug, Clone)]
pub struct DohClient {
    client: Arc<reqwest::Client>,
    endpoint: Url,
    stats: Arc<QueryStats>,
}

impl DohClient {
    /// Creates a client for `endpoint` using an existing HTTP client.
    pub fn new(client: Arc<reqwest::Client>, endpoint: Url) -> Self {
        Self {
            client,
            endpoint,
            stats: Arc::new(QueryStats::new()),
        }
    }

    /// Builds the HTTP client and endpoint from configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the endpoint is not an HTTP(S) URL or
    /// the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let endpoint = parse_endpoint(&config.endpoint)?;
        let client = init_client(config)?;
        Ok(Self::new(client, endpoint))
    }

    /// Shares an existing statistics tracker with this client.
    pub fn with_stats(mut self, stats: Arc<QueryStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> &Arc<QueryStats> {
        &self.stats
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch(&self, record_type: DnsRecordType, name: &str) -> Result<Vec<RawRecord>, DohError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("name", name), ("type", record_type.as_str())])
            .header(reqwest::header::ACCEPT, DOH_JSON_CONTENT_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DohError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: DohResponse = serde_json::from_slice(&body)?;

        if let Some(rcode) = parsed.status.filter(|rcode| *rcode != 0) {
            debug!("{record_type} query for {name} returned rcode {rcode}");
        }

        Ok(parsed
            .answer
            .unwrap_or_default()
            .into_iter()
            .map(|answer| RawRecord {
                record_type: RecordKind::from(answer.rtype),
                data: answer.data,
            })
            .collect())
    }
}

impl DnsQuery for DohClient {
    async fn query(&self, record_type: DnsRecordType, name: &str) -> Vec<RawRecord> {
        self.stats.increment_queries();
        match self.fetch(record_type, name).await {
            Ok(records) => {
                debug!(
                    "{record_type} query for {name}: {} answer(s)",
                    records.len()
                );
                records
            }
            Err(e) => {
                warn!("{record_type} lookup failed for {name}: {e}");
                self.stats.increment_failure(categorize_doh_error(&e));
                Vec::new()
            }
        }
    }
}
