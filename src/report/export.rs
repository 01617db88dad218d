//! Writing rendered results to a file.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Writes rendered results to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be written. Callers treat this as
/// non-fatal: the results have already been shown.
pub fn export_results(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;
    info!("Results written to {}", path.display());
    Ok(())
}
