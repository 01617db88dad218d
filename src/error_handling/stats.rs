//! Query statistics tracking.
//!
//! This module provides thread-safe counters for DoH queries issued and
//! failures by category.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::QueryFailure;

/// Thread-safe query statistics tracker.
///
/// Counts every DoH query issued and every failed query by `QueryFailure`
/// category. All categories are initialized to zero on creation. Share it
/// across tasks with `Arc`.
#[derive(Debug)]
pub struct QueryStats {
    queries: AtomicUsize,
    failures: HashMap<QueryFailure, AtomicUsize>,
}

impl Default for QueryStats {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in QueryFailure::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }

        QueryStats {
            queries: AtomicUsize::new(0),
            failures,
        }
    }

    /// Records one issued query.
    pub fn increment_queries(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a failure counter.
    pub fn increment_failure(&self, failure: QueryFailure) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in QueryStats initialization.",
                failure
            );
        }
    }

    /// Get the count for a failure category.
    pub fn get_failure_count(&self, failure: QueryFailure) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total queries issued.
    pub fn total_queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Get total failure count across all categories.
    pub fn total_failures(&self) -> usize {
        QueryFailure::iter()
            .map(|f| self.get_failure_count(f))
            .sum()
    }
}
