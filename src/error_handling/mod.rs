//! Error handling and query statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, request validation, DoH queries)
//! - Failure categorization for DoH queries
//! - Query statistics tracking
//!
//! DoH failures never reach the caller: the client absorbs them, returns an
//! empty answer, and records the failure category in `QueryStats`.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_doh_error, categorize_reqwest_error};
pub use stats::QueryStats;
pub use types::{DohError, InitializationError, LookupRequestError, QueryFailure};
