//! Runs the query plan and assembles the outcome.

use std::time::Instant;

use log::{debug, info};

use crate::config::MissingRecordPolicy;
use crate::dns::{classify, resolve_hostname_addresses, DnsQuery, RawRecord, RecordLabel};

use super::plan::{build_query_plan, QueryStep, StepKind};
use super::types::{ClassifiedRecord, LookupOutcome, LookupRequest, NoRecordFound, OutcomeEntry};

/// Diagnostics runner bound to a query client.
///
/// # Examples
///
/// ```no_run
/// use domain_check::{Config, Diagnostics, DohClient, LookupRequest, MissingRecordPolicy};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DohClient::from_config(&Config::default())?;
/// let outcome = Diagnostics::new(&client)
///     .with_missing_records(MissingRecordPolicy::All)
///     .run(&LookupRequest::new("example.com"))
///     .await;
/// for record in outcome.records() {
///     println!("{}: {}", record.label, record.value);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Diagnostics<'a, Q> {
    client: &'a Q,
    missing_records: MissingRecordPolicy,
}

impl<'a, Q: DnsQuery> Diagnostics<'a, Q> {
    pub fn new(client: &'a Q) -> Self {
        Self {
            client,
            missing_records: MissingRecordPolicy::default(),
        }
    }

    pub fn with_missing_records(mut self, policy: MissingRecordPolicy) -> Self {
        self.missing_records = policy;
        self
    }

    /// Runs every step of the plan for `request`, in order.
    ///
    /// Never fails: a step whose query returns nothing contributes nothing,
    /// or a `NoRecordFound` entry for DKIM (and for every step under
    /// `MissingRecordPolicy::All`).
    pub async fn run(&self, request: &LookupRequest) -> LookupOutcome {
        let start = Instant::now();
        let mut outcome = LookupOutcome::new(request.clone());

        for step in build_query_plan(request) {
            debug!("Querying {} {}", step.record_type, step.name);
            let records = self.client.query(step.record_type, &step.name).await;

            if records.is_empty() {
                if let Some(missing) = self.missing_entry(&step, request) {
                    outcome.push(OutcomeEntry::NotFound(missing));
                }
                continue;
            }

            for raw in records {
                let record = self.classify_record(&step, request, raw).await;
                outcome.push(OutcomeEntry::Record(record));
            }
        }

        info!(
            "Diagnostics for {} finished: {} entries in {:.2}s",
            request.domain,
            outcome.len(),
            start.elapsed().as_secs_f64()
        );
        outcome
    }

    async fn classify_record(
        &self,
        step: &QueryStep,
        request: &LookupRequest,
        raw: RawRecord,
    ) -> ClassifiedRecord {
        let label = match step.kind {
            StepKind::Base => classify(&raw.data, step.record_type),
            StepKind::Dkim { .. } => RecordLabel::Dkim,
            StepKind::Dmarc => match classify(&raw.data, step.record_type) {
                RecordLabel::Type(_) => RecordLabel::Dmarc,
                label => label,
            },
        };

        let resolved_addresses =
            if step.kind == StepKind::Base && step.record_type.is_hostname_bearing() {
                resolve_hostname_addresses(self.client, &raw.data).await
            } else {
                Vec::new()
            };

        ClassifiedRecord {
            domain: request.domain.clone(),
            query_type: step.record_type,
            queried_name: step.name.clone(),
            label,
            value: raw.data,
            resolved_addresses,
        }
    }

    fn missing_entry(&self, step: &QueryStep, request: &LookupRequest) -> Option<NoRecordFound> {
        let reason = match (&step.kind, self.missing_records) {
            (StepKind::Dkim { selector }, _) => {
                format!("No DKIM record found for selector \"{selector}\"")
            }
            (_, MissingRecordPolicy::All) => {
                format!("No {} record found for {}", step.label(), request.domain)
            }
            (_, MissingRecordPolicy::DkimOnly) => return None,
        };

        Some(NoRecordFound {
            label: step.label(),
            domain: request.domain.clone(),
            queried_name: step.name.clone(),
            reason,
        })
    }
}

/// Runs diagnostics for `request` with the default missing-record policy.
pub async fn run_diagnostics<Q: DnsQuery>(client: &Q, request: &LookupRequest) -> LookupOutcome {
    Diagnostics::new(client).run(request).await
}
