//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::constants::{DEFAULT_DOH_ENDPOINT, DEFAULT_USER_AGENT, DNS_QUERY_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output format for diagnostic results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable record listing
    Text,
    /// The full outcome as pretty-printed JSON
    Json,
}

/// Which plan steps report an explicit "no record found" entry.
///
/// The DKIM selector lookup has always produced a negative entry when it
/// comes back empty, while the other steps silently contribute nothing.
/// `DkimOnly` keeps that behavior; `All` reports every empty step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRecordPolicy {
    /// Only the DKIM selector lookup reports missing records
    #[default]
    DkimOnly,
    /// Every empty query step reports a missing record
    All,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use domain_check::Config;
///
/// let config = Config {
///     timeout_seconds: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// DoH endpoint URL (JSON API)
    pub endpoint: String,

    /// Per-query timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Missing-record reporting policy
    pub missing_records: MissingRecordPolicy,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            timeout_seconds: DNS_QUERY_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            missing_records: MissingRecordPolicy::DkimOnly,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Base records, DMARC, and the DKIM key for selector "google"
/// domain_check example.com --selector google
///
/// # Include AAAA records and report every empty lookup
/// domain_check example.com --ipv6 --report-missing
///
/// # JSON output written to a file
/// domain_check example.com --format json --output results.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_check",
    about = "Looks up DNS records for a domain over DNS-over-HTTPS and labels SPF, DKIM and DMARC entries."
)]
pub struct Opt {
    /// Domain to look up
    pub domain: String,

    /// DKIM selector ("default" or empty skips the DKIM lookup)
    #[arg(long, short = 's')]
    pub selector: Option<String>,

    /// Also query AAAA records
    #[arg(long = "ipv6", short = '6')]
    pub include_ipv6: bool,

    /// DoH endpoint URL (must accept the JSON API)
    #[arg(long, default_value = DEFAULT_DOH_ENDPOINT)]
    pub endpoint: String,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = DNS_QUERY_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Report a "no record found" entry for every empty lookup, not only DKIM
    #[arg(long)]
    pub report_missing: bool,

    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the results (uncolored) to this file
    #[arg(long, short = 'o', value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Self {
            endpoint: opt.endpoint.clone(),
            timeout_seconds: opt.timeout_seconds,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            missing_records: if opt.report_missing {
                MissingRecordPolicy::All
            } else {
                MissingRecordPolicy::DkimOnly
            },
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
