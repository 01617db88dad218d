//! Failure categorization for DoH queries.

use super::types::{DohError, QueryFailure};

/// Categorizes a `reqwest::Error` into a `QueryFailure`.
///
/// Status errors are checked first, then timeouts (a timed-out connect is
/// reported as a timeout, not a connect error).
pub fn categorize_reqwest_error(error: &reqwest::Error) -> QueryFailure {
    if error.status().is_some() || error.is_status() {
        QueryFailure::HttpStatus
    } else if error.is_timeout() {
        QueryFailure::Timeout
    } else if error.is_connect() {
        QueryFailure::Connect
    } else if error.is_decode() || error.is_body() {
        QueryFailure::Decode
    } else if error.is_request() || error.is_builder() {
        QueryFailure::Request
    } else {
        QueryFailure::Other
    }
}

/// Categorizes a `DohError` into a `QueryFailure`.
pub fn categorize_doh_error(error: &DohError) -> QueryFailure {
    match error {
        DohError::Request(e) => categorize_reqwest_error(e),
        DohError::Status(_) => QueryFailure::HttpStatus,
        DohError::Decode(_) => QueryFailure::Decode,
    }
}
