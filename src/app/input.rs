//! Domain validation and request construction.

use log::debug;

use crate::config::MAX_DOMAIN_LENGTH;
use crate::diagnostics::LookupRequest;
use crate::error_handling::LookupRequestError;

/// Validates and normalizes a domain name.
///
/// Trims surrounding whitespace and a single trailing dot, then checks that
/// the result parses as a DNS domain (not an IP address). Internationalized
/// names are converted to their ASCII (punycode) form and the result is
/// lowercased.
///
/// # Errors
///
/// Returns `LookupRequestError` if the domain is empty, longer than
/// `MAX_DOMAIN_LENGTH`, or not a valid domain name.
pub fn validate_domain(domain: &str) -> Result<String, LookupRequestError> {
    let trimmed = domain.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(LookupRequestError::EmptyDomain);
    }

    let invalid = |reason: &str| LookupRequestError::InvalidDomain {
        domain: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.contains(char::is_whitespace) || trimmed.contains('/') {
        return Err(invalid("contains whitespace or '/'"));
    }

    let normalized = match url::Host::parse(trimmed) {
        Ok(url::Host::Domain(name)) => name,
        Ok(_) => return Err(invalid("IP addresses have no DNS records to diagnose")),
        Err(e) => return Err(invalid(&e.to_string())),
    };

    if normalized.len() > MAX_DOMAIN_LENGTH {
        return Err(LookupRequestError::DomainTooLong {
            length: normalized.len(),
            max: MAX_DOMAIN_LENGTH,
        });
    }
    if normalized
        .split('.')
        .any(|label| label.is_empty() || label.len() > 63)
    {
        return Err(invalid("labels must be 1 to 63 characters"));
    }

    if normalized != domain {
        debug!("Normalized domain {domain:?} to {normalized:?}");
    }
    Ok(normalized)
}

/// Trims a DKIM selector; blank selectors become `None`.
pub fn normalize_selector(selector: Option<&str>) -> Option<String> {
    selector
        .map(str::trim)
        .filter(|selector| !selector.is_empty())
        .map(str::to_string)
}

/// Builds a `LookupRequest` from raw user input.
///
/// # Errors
///
/// Returns `LookupRequestError` if the domain is invalid.
pub fn build_request(
    domain: &str,
    selector: Option<&str>,
    include_ipv6: bool,
) -> Result<LookupRequest, LookupRequestError> {
    Ok(LookupRequest {
        domain: validate_domain(domain)?,
        dkim_selector: normalize_selector(selector),
        include_ipv6,
    })
}
