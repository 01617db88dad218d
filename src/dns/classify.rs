//! TXT content classification.

use crate::config::{DKIM_MARKER, DMARC_MARKER, SPF_MARKER};

use super::record_type::{DnsRecordType, RecordLabel};

/// Labels a record value by its content.
///
/// Markers are checked in order (SPF, DKIM, DMARC) and the first substring
/// match wins. Values without a marker keep the queried type as their label.
/// The result depends only on `value` whenever a marker matches, so a DKIM
/// key returned by a plain TXT query is still labelled DKIM.
///
/// # Examples
///
/// ```
/// use domain_check::dns::{classify, DnsRecordType, RecordLabel};
///
/// assert_eq!(classify("v=spf1 -all", DnsRecordType::Txt), RecordLabel::Spf);
/// assert_eq!(
///     classify("google-site-verification=abc", DnsRecordType::Txt),
///     RecordLabel::Type(DnsRecordType::Txt)
/// );
/// ```
pub fn classify(value: &str, queried_type: DnsRecordType) -> RecordLabel {
    if value.contains(SPF_MARKER) {
        RecordLabel::Spf
    } else if value.contains(DKIM_MARKER) {
        RecordLabel::Dkim
    } else if value.contains(DMARC_MARKER) {
        RecordLabel::Dmarc
    } else {
        RecordLabel::Type(queried_type)
    }
}
