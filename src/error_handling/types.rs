//! Error type definitions.
//!
//! This module defines the error and failure types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured DoH endpoint is not a usable HTTP(S) URL.
    #[error("Invalid DoH endpoint '{endpoint}': {reason}")]
    EndpointError { endpoint: String, reason: String },
}

/// Error types for rejected lookup input.
///
/// Returned before any query is issued; a request that passes validation
/// never fails afterwards.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupRequestError {
    /// The domain was empty after trimming.
    #[error("Domain must not be empty")]
    EmptyDomain,

    /// The domain exceeds the DNS name length limit.
    #[error("Domain is too long ({length} > {max} characters)")]
    DomainTooLong { length: usize, max: usize },

    /// The domain is not a syntactically valid DNS name.
    #[error("Invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },
}

/// A failed DoH query.
///
/// Only used inside the client to log and categorize the failure; callers
/// see an empty answer instead.
#[derive(Error, Debug)]
pub enum DohError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("DoH request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The endpoint answered with a non-success status.
    #[error("DoH endpoint returned HTTP {0}")]
    Status(u16),

    /// The response body was not a DNS JSON document.
    #[error("DoH response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Categories of DoH query failures, tracked in `QueryStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum QueryFailure {
    Timeout,
    Connect,
    HttpStatus,
    Decode,
    Request,
    Other,
}

impl std::fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryFailure::Timeout => "DoH query timeout",
            QueryFailure::Connect => "DoH connect error",
            QueryFailure::HttpStatus => "DoH HTTP status error",
            QueryFailure::Decode => "DoH response decode error",
            QueryFailure::Request => "DoH request error",
            QueryFailure::Other => "DoH other error",
        }
    }
}
