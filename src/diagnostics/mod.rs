//! DNS diagnostics for a single domain.
//!
//! This module provides:
//! - Request and outcome types (`LookupRequest`, `LookupOutcome`)
//! - The fixed query plan (base types, optional AAAA, DKIM, DMARC)
//! - The orchestrator that runs the plan and classifies every answer
//!
//! Queries run one at a time in plan order, so the outcome order is the plan
//! order, and within a step, the resolver's answer order.

mod orchestrator;
mod plan;
mod types;

// Re-export public API
pub use orchestrator::{run_diagnostics, Diagnostics};
pub use plan::{build_query_plan, QueryStep, StepKind, BASE_RECORD_TYPES};
pub use types::{ClassifiedRecord, LookupOutcome, LookupRequest, NoRecordFound, OutcomeEntry};

#[cfg(test)]
mod tests;
