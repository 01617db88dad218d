//! Application helpers used by the binary.
//!
//! Domain and selector values arrive from the user untrimmed; this module
//! turns them into a validated `LookupRequest` and reports query statistics
//! after a run.

pub mod input;
pub mod statistics;

// Re-export public API
pub use input::{build_request, normalize_selector, validate_domain};
pub use statistics::log_query_statistics;
