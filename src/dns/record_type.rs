//! Record types, raw answers, and display labels.

use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString};

/// DNS record types queried by the diagnostics.
///
/// The mnemonic (`A`, `AAAA`, ...) is what the DoH JSON API takes as the
/// `type` parameter and what is shown to users.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Mx,
    Ns,
    Cname,
    Txt,
}

impl DnsRecordType {
    /// IANA resource record type code.
    pub fn code(&self) -> u16 {
        match self {
            DnsRecordType::A => 1,
            DnsRecordType::Ns => 2,
            DnsRecordType::Cname => 5,
            DnsRecordType::Mx => 15,
            DnsRecordType::Txt => 16,
            DnsRecordType::Aaaa => 28,
        }
    }

    /// Looks up a record type by its IANA code.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(DnsRecordType::A),
            2 => Some(DnsRecordType::Ns),
            5 => Some(DnsRecordType::Cname),
            15 => Some(DnsRecordType::Mx),
            16 => Some(DnsRecordType::Txt),
            28 => Some(DnsRecordType::Aaaa),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DnsRecordType::A => "A",
            DnsRecordType::Aaaa => "AAAA",
            DnsRecordType::Mx => "MX",
            DnsRecordType::Ns => "NS",
            DnsRecordType::Cname => "CNAME",
            DnsRecordType::Txt => "TXT",
        }
    }

    /// Whether the record data names a host that can be resolved further.
    pub fn is_hostname_bearing(&self) -> bool {
        matches!(self, DnsRecordType::Mx | DnsRecordType::Ns)
    }
}

/// Type of an answer entry as returned by the resolver.
///
/// Answers are not limited to the queried type: an A query for an alias
/// returns the CNAME chain too, and resolvers may return types outside
/// `DnsRecordType` altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordKind {
    Known(DnsRecordType),
    Other(u16),
}

impl From<u16> for RecordKind {
    fn from(code: u16) -> Self {
        match DnsRecordType::from_code(code) {
            Some(record_type) => RecordKind::Known(record_type),
            None => RecordKind::Other(code),
        }
    }
}

impl RecordKind {
    pub fn code(&self) -> u16 {
        match self {
            RecordKind::Known(record_type) => record_type.code(),
            RecordKind::Other(code) => *code,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Known(record_type) => f.write_str(record_type.as_str()),
            RecordKind::Other(code) => write!(f, "TYPE{code}"),
        }
    }
}

/// One answer entry from a DoH query, in resolver presentation format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub record_type: RecordKind,
    pub data: String,
}

impl RawRecord {
    pub fn new(record_type: impl Into<RecordKind>, data: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            data: data.into(),
        }
    }
}

impl From<DnsRecordType> for RecordKind {
    fn from(record_type: DnsRecordType) -> Self {
        RecordKind::Known(record_type)
    }
}

/// Human-facing category of a record.
///
/// TXT content carrying an SPF, DKIM or DMARC marker gets its own label;
/// everything else is labelled with the record type it was queried as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLabel {
    Type(DnsRecordType),
    Spf,
    Dkim,
    Dmarc,
}

impl RecordLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordLabel::Type(record_type) => record_type.as_str(),
            RecordLabel::Spf => "SPF",
            RecordLabel::Dkim => "DKIM",
            RecordLabel::Dmarc => "DMARC",
        }
    }
}

impl std::fmt::Display for RecordLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
