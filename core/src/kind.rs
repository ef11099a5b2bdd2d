//! The closed catalog of supported data kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One member of the closed set of supported value types.
///
/// `None` is a sentinel: it marks "no kind configured" and must never reach
/// conversion or validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataKind {
    None,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    String,
    ByteArray,
    Uri,
    Xml,
    Enum,
    Guid,
    DateTimeOffset,
    TimeSpan,
    Version,
}

impl DataKind {
    /// Every kind, including the `None` sentinel, in declaration order.
    pub const ALL: [DataKind; 23] = [
        DataKind::None,
        DataKind::Boolean,
        DataKind::Char,
        DataKind::SByte,
        DataKind::Byte,
        DataKind::Int16,
        DataKind::UInt16,
        DataKind::Int32,
        DataKind::UInt32,
        DataKind::Int64,
        DataKind::UInt64,
        DataKind::Single,
        DataKind::Double,
        DataKind::Decimal,
        DataKind::String,
        DataKind::ByteArray,
        DataKind::Uri,
        DataKind::Xml,
        DataKind::Enum,
        DataKind::Guid,
        DataKind::DateTimeOffset,
        DataKind::TimeSpan,
        DataKind::Version,
    ];

    /// The eight fixed-width integer kinds.
    pub const INTEGERS: [DataKind; 8] = [
        DataKind::SByte,
        DataKind::Byte,
        DataKind::Int16,
        DataKind::UInt16,
        DataKind::Int32,
        DataKind::UInt32,
        DataKind::Int64,
        DataKind::UInt64,
    ];

    /// Canonical name, as used in configuration files and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            DataKind::None => "None",
            DataKind::Boolean => "Boolean",
            DataKind::Char => "Char",
            DataKind::SByte => "SByte",
            DataKind::Byte => "Byte",
            DataKind::Int16 => "Int16",
            DataKind::UInt16 => "UInt16",
            DataKind::Int32 => "Int32",
            DataKind::UInt32 => "UInt32",
            DataKind::Int64 => "Int64",
            DataKind::UInt64 => "UInt64",
            DataKind::Single => "Single",
            DataKind::Double => "Double",
            DataKind::Decimal => "Decimal",
            DataKind::String => "String",
            DataKind::ByteArray => "ByteArray",
            DataKind::Uri => "Uri",
            DataKind::Xml => "Xml",
            DataKind::Enum => "Enum",
            DataKind::Guid => "Guid",
            DataKind::DateTimeOffset => "DateTimeOffset",
            DataKind::TimeSpan => "TimeSpan",
            DataKind::Version => "Version",
        }
    }

    /// Look up a kind by its canonical name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Returns true for the `None` sentinel.
    pub fn is_none(self) -> bool {
        matches!(self, DataKind::None)
    }

    /// Returns true for kinds whose values are text (String, Xml).
    pub fn is_text(self) -> bool {
        matches!(self, DataKind::String | DataKind::Xml)
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a data kind name is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown data kind: {0}")]
pub struct UnknownDataKind(pub String);

impl FromStr for DataKind {
    type Err = UnknownDataKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownDataKind(s.to_string()))
    }
}
