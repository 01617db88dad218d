//! JSON rendering.

use crate::diagnostics::LookupOutcome;

/// Renders the outcome (request and entries) as pretty-printed JSON.
///
/// Entries carry a `kind` tag (`record` or `not_found`); record types and
/// labels serialize as their mnemonics.
pub fn render_json(outcome: &LookupOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}
