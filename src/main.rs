//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing and exporting results
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use std::process;

use domain_check::app::{build_request, log_query_statistics};
use domain_check::config::Opt;
use domain_check::initialization::init_logger_with;
use domain_check::report::{export_results, render_colored, render_json, render_text};
use domain_check::{Config, Diagnostics, DohClient, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let request = match build_request(&opt.domain, opt.selector.as_deref(), opt.include_ipv6) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("domain_check error: {e}");
            process::exit(2);
        }
    };

    let config = Config::from(&opt);
    let client = DohClient::from_config(&config).context("Failed to initialize DoH client")?;

    let outcome = Diagnostics::new(&client)
        .with_missing_records(config.missing_records)
        .run(&request)
        .await;

    let (display, exported) = match opt.format {
        OutputFormat::Text => (render_colored(&outcome), render_text(&outcome)),
        OutputFormat::Json => {
            let json = render_json(&outcome).context("Failed to serialize results")?;
            (format!("{json}\n"), format!("{json}\n"))
        }
    };
    print!("{display}");

    // Export failures are reported but do not change the exit status
    if let Some(path) = &opt.output {
        if let Err(e) = export_results(path, &exported) {
            warn!("{e:#}");
        }
    }

    log_query_statistics(client.stats());
    Ok(())
}
