//! Typed values, one variant per data kind.
//!
//! A `Value` is what a constraint validates. Every non-null variant maps to
//! exactly one `DataKind`; `Null` is the absent value and has no kind.

use crate::{DataKind, Version};
use chrono::{DateTime, FixedOffset, TimeDelta};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use url::Url;
use uuid::Uuid;

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    Boolean(bool),
    Char(char),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    /// Exact decimal number.
    Decimal(Decimal),
    /// UTF-8 string.
    String(String),
    ByteArray(Vec<u8>),
    /// Absolute URI.
    Uri(Url),
    /// XML fragment text.
    Xml(String),
    /// Enumeration value, widened so every integer width fits.
    Enum(i128),
    Guid(Uuid),
    DateTimeOffset(DateTime<FixedOffset>),
    TimeSpan(TimeDelta),
    Version(Version),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The data kind of this value, or `None` for `Null`.
    pub fn kind(&self) -> Option<DataKind> {
        let kind = match self {
            Value::Null => return None,
            Value::Boolean(_) => DataKind::Boolean,
            Value::Char(_) => DataKind::Char,
            Value::SByte(_) => DataKind::SByte,
            Value::Byte(_) => DataKind::Byte,
            Value::Int16(_) => DataKind::Int16,
            Value::UInt16(_) => DataKind::UInt16,
            Value::Int32(_) => DataKind::Int32,
            Value::UInt32(_) => DataKind::UInt32,
            Value::Int64(_) => DataKind::Int64,
            Value::UInt64(_) => DataKind::UInt64,
            Value::Single(_) => DataKind::Single,
            Value::Double(_) => DataKind::Double,
            Value::Decimal(_) => DataKind::Decimal,
            Value::String(_) => DataKind::String,
            Value::ByteArray(_) => DataKind::ByteArray,
            Value::Uri(_) => DataKind::Uri,
            Value::Xml(_) => DataKind::Xml,
            Value::Enum(_) => DataKind::Enum,
            Value::Guid(_) => DataKind::Guid,
            Value::DateTimeOffset(_) => DataKind::DateTimeOffset,
            Value::TimeSpan(_) => DataKind::TimeSpan,
            Value::Version(_) => DataKind::Version,
        };
        Some(kind)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.kind().map(DataKind::name).unwrap_or("Null")
    }

    /// Get the text of a String, Xml or Uri value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Xml(s) => Some(s),
            Value::Uri(u) => Some(u.as_str()),
            _ => None,
        }
    }

    /// Get the bytes of a ByteArray value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::ByteArray(b) => Some(b),
            _ => None,
        }
    }

    /// Get an integer or enum value widened to `i128`.
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Value::SByte(v) => Some(v.into()),
            Value::Byte(v) => Some(v.into()),
            Value::Int16(v) => Some(v.into()),
            Value::UInt16(v) => Some(v.into()),
            Value::Int32(v) => Some(v.into()),
            Value::UInt32(v) => Some(v.into()),
            Value::Int64(v) => Some(v.into()),
            Value::UInt64(v) => Some(v.into()),
            Value::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// Length used by length constraints: Unicode scalar values for text,
    /// bytes for byte sequences.
    pub fn measured_len(&self) -> Option<usize> {
        match self {
            Value::ByteArray(b) => Some(b.len()),
            other => other.as_text().map(|s| s.chars().count()),
        }
    }

    /// Compare two values of the same kind.
    ///
    /// Returns `None` for values of different kinds, for kinds without a
    /// natural order, and for NaN floats.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            (Value::Single(a), Value::Single(b)) => a.partial_cmp(b),
            (Value::Double(a), Value::Double(b)) => a.partial_cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            (Value::DateTimeOffset(a), Value::DateTimeOffset(b)) => Some(a.cmp(b)),
            (Value::TimeSpan(a), Value::TimeSpan(b)) => Some(a.cmp(b)),
            (Value::Version(a), Value::Version(b)) => Some(a.cmp(b)),
            (a, b) if a.kind() == b.kind() => match (a.as_integer(), b.as_integer()) {
                (Some(x), Some(y)) => Some(x.cmp(&y)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c),
            Value::SByte(v) => write!(f, "{}", v),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::UInt16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::UInt32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::Single(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::ByteArray(b) => write!(f, "<{} bytes>", b.len()),
            Value::Uri(u) => write!(f, "{}", u),
            Value::Xml(x) => write!(f, "{}", x),
            Value::Enum(v) => write!(f, "enum:{}", v),
            Value::Guid(g) => write!(f, "{}", g),
            Value::DateTimeOffset(t) => write!(f, "{}", t.to_rfc3339()),
            Value::TimeSpan(d) => write!(f, "{}", d),
            Value::Version(v) => write!(f, "{}", v),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int32(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int64(i)
    }
}

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        Value::UInt64(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::ByteArray(b)
    }
}

impl From<Version> for Value {
    fn from(v: Version) -> Self {
        Value::Version(v)
    }
}
