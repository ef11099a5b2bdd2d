//! Typed value to canonical text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::SecondsFormat;
use ward_core::{ConversionError, ConversionResult, DataKind, Value};

use crate::timespan::format_timespan;

/// Render `value` in the canonical, culture-invariant text form of `kind`.
///
/// The value must be of exactly `kind`; `Null` and `DataKind::None` are
/// rejected.
pub fn format(value: &Value, kind: DataKind) -> ConversionResult<String> {
    if kind.is_none() {
        return Err(ConversionError::NoneKind);
    }
    if value.kind() != Some(kind) {
        return Err(ConversionError::kind_mismatch(kind, value.type_name()));
    }

    let text = match value {
        Value::Boolean(b) => b.to_string(),
        Value::Char(c) => c.to_string(),
        Value::SByte(v) => v.to_string(),
        Value::Byte(v) => v.to_string(),
        Value::Int16(v) => v.to_string(),
        Value::UInt16(v) => v.to_string(),
        Value::Int32(v) => v.to_string(),
        Value::UInt32(v) => v.to_string(),
        Value::Int64(v) => v.to_string(),
        Value::UInt64(v) => v.to_string(),
        Value::Single(v) => format_float(f64::from(*v), v.to_string()),
        Value::Double(v) => format_float(*v, v.to_string()),
        Value::Decimal(d) => d.to_string(),
        Value::String(s) | Value::Xml(s) => s.clone(),
        Value::ByteArray(b) => STANDARD.encode(b),
        Value::Uri(u) => u.as_str().to_string(),
        Value::Enum(v) => v.to_string(),
        Value::Guid(g) => g.hyphenated().to_string(),
        Value::DateTimeOffset(t) => t.to_rfc3339_opts(SecondsFormat::AutoSi, false),
        Value::TimeSpan(d) => format_timespan(*d),
        Value::Version(v) => v.to_string(),
        Value::Null => return Err(ConversionError::kind_mismatch(kind, "Null")),
    };
    Ok(text)
}

/// Shortest round-trip digits, with invariant spellings for the
/// non-finite values.
fn format_float(value: f64, shortest: String) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        shortest
    }
}
