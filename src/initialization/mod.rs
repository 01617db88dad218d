//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON)
//! - HTTP client for DoH queries
//! - DoH endpoint parsing
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, parse_endpoint};
pub use logger::init_logger_with;
