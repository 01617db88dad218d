//! Query statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{QueryFailure, QueryStats};

/// Logs the number of DoH queries issued and any failures by category.
pub fn log_query_statistics(stats: &QueryStats) {
    let total_failures = stats.total_failures();
    info!(
        "DoH queries: {} issued, {} failed",
        stats.total_queries(),
        total_failures
    );

    if total_failures > 0 {
        info!("Failure Counts ({} total):", total_failures);
        for failure in QueryFailure::iter() {
            let count = stats.get_failure_count(failure);
            if count > 0 {
                info!("   {}: {}", failure.as_str(), count);
            }
        }
    }
}
