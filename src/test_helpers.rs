//! Shared helpers for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::dns::{DnsQuery, DnsRecordType, RawRecord};

/// In-memory `DnsQuery` that serves canned answers and records every query.
///
/// Names are matched exactly; anything not configured answers empty.
#[derive(Default)]
pub struct RecordingResolver {
    answers: HashMap<(DnsRecordType, String), Vec<RawRecord>>,
    queries: Mutex<Vec<(DnsRecordType, String)>>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds answers of the queried type for `(record_type, name)`.
    pub fn with(mut self, record_type: DnsRecordType, name: &str, data: &[&str]) -> Self {
        let records = data
            .iter()
            .map(|d| RawRecord::new(record_type, *d))
            .collect();
        self.answers.insert((record_type, name.to_string()), records);
        self
    }

    /// Adds raw answers (mixed types) for `(record_type, name)`.
    pub fn with_records(
        mut self,
        record_type: DnsRecordType,
        name: &str,
        records: Vec<RawRecord>,
    ) -> Self {
        self.answers.insert((record_type, name.to_string()), records);
        self
    }

    /// Queries issued so far, in order.
    pub fn queries(&self) -> Vec<(DnsRecordType, String)> {
        self.queries.lock().unwrap().clone()
    }
}

impl DnsQuery for RecordingResolver {
    async fn query(&self, record_type: DnsRecordType, name: &str) -> Vec<RawRecord> {
        self.queries
            .lock()
            .unwrap()
            .push((record_type, name.to_string()));
        self.answers
            .get(&(record_type, name.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}
