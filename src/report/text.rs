//! Text rendering.

use colored::*;

use crate::diagnostics::{LookupOutcome, OutcomeEntry};

/// Heading and body lines for one entry.
///
/// Records render as `"{label} record for {domain}:"` followed by the value;
/// MX and NS values get their resolved addresses appended in parentheses.
/// Not-found entries show the reason as the body.
pub fn entry_lines(entry: &OutcomeEntry) -> (String, String) {
    match entry {
        OutcomeEntry::Record(record) => {
            let heading = format!("{} record for {}:", record.label, record.domain);
            let body = if record.carries_addresses() {
                format!("{} ({})", record.value, record.resolved_addresses_joined())
            } else {
                record.value.clone()
            };
            (heading, body)
        }
        OutcomeEntry::NotFound(missing) => (
            format!("{} record for {}:", missing.label, missing.domain),
            missing.reason.clone(),
        ),
    }
}

fn empty_message(outcome: &LookupOutcome) -> String {
    format!("No DNS records found for {}", outcome.request.domain)
}

/// Renders the outcome as plain text, one heading/value pair per entry.
pub fn render_text(outcome: &LookupOutcome) -> String {
    if outcome.is_empty() {
        return format!("{}\n", empty_message(outcome));
    }

    let mut out = String::new();
    for entry in outcome {
        let (heading, body) = entry_lines(entry);
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&body);
        out.push('\n');
    }
    out
}

/// Renders the outcome for a terminal: bold headings, green values, red
/// not-found messages.
pub fn render_colored(outcome: &LookupOutcome) -> String {
    if outcome.is_empty() {
        return format!("{}\n", empty_message(outcome).red());
    }

    let mut out = String::new();
    for entry in outcome {
        let (heading, body) = entry_lines(entry);
        let body = match entry {
            OutcomeEntry::Record(_) => body.bright_green(),
            OutcomeEntry::NotFound(_) => body.red(),
        };
        out.push_str(&format!("{}\n{}\n", heading.white().bold(), body));
    }
    out
}
