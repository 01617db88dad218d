//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, record markers)
//! - Library configuration (`Config`) and the missing-record policy
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, MissingRecordPolicy, Opt, OutputFormat};
