//! Canonical text to typed value.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::DateTime;
use rust_decimal::Decimal;
use url::Url;
use uuid::Uuid;
use ward_core::{ConversionError, ConversionResult, DataKind, Value, Version, VersionParseError};

use crate::timespan::parse_timespan;
use crate::width::integer_value;

/// Largest magnitude accepted by the enum-value sub-grammar.
const ENUM_MIN: i128 = i64::MIN as i128;
const ENUM_MAX: i128 = u64::MAX as i128;

/// Parse canonical `text` as a value of `kind`.
///
/// Fails when the text cannot be interpreted as `kind` or lies outside its
/// representable range. `DataKind::None` is always rejected.
pub fn parse(text: &str, kind: DataKind) -> ConversionResult<Value> {
    match kind {
        DataKind::None => Err(ConversionError::NoneKind),
        DataKind::Boolean => parse_bool(text),
        DataKind::Char => parse_char(text),
        DataKind::SByte
        | DataKind::Byte
        | DataKind::Int16
        | DataKind::UInt16
        | DataKind::Int32
        | DataKind::UInt32
        | DataKind::Int64
        | DataKind::UInt64 => parse_integer(text, kind),
        DataKind::Single => match float_special(text) {
            Some(special) => Ok(Value::Single(special as f32)),
            None => {
                check_float_syntax(text, kind)?;
                let v: f32 = text
                    .parse()
                    .map_err(|e| ConversionError::invalid(kind, text, e))?;
                if v.is_infinite() {
                    return Err(ConversionError::out_of_range(kind, text));
                }
                Ok(Value::Single(v))
            }
        },
        DataKind::Double => parse_float(text, kind).map(Value::Double),
        DataKind::Decimal => parse_decimal(text),
        DataKind::String => Ok(Value::String(text.to_string())),
        DataKind::ByteArray => STANDARD
            .decode(text)
            .map(Value::ByteArray)
            .map_err(|e| ConversionError::invalid(kind, text, e)),
        DataKind::Uri => Url::parse(text)
            .map(Value::Uri)
            .map_err(|e| ConversionError::invalid(kind, text, e)),
        DataKind::Xml => parse_xml(text),
        DataKind::Enum => parse_enum_value(text).map(Value::Enum),
        DataKind::Guid => Uuid::parse_str(text)
            .map(Value::Guid)
            .map_err(|e| ConversionError::invalid(kind, text, e)),
        DataKind::DateTimeOffset => DateTime::parse_from_rfc3339(text)
            .map(Value::DateTimeOffset)
            .map_err(|e| ConversionError::invalid(kind, text, e)),
        DataKind::TimeSpan => parse_timespan(text).map(Value::TimeSpan),
        DataKind::Version => text.parse::<Version>().map(Value::Version).map_err(|e| match e {
            VersionParseError::ComponentOverflow(_) => ConversionError::out_of_range(kind, text),
            other => ConversionError::invalid(kind, text, other),
        }),
    }
}

/// Parse an enum value: canonical decimal (optionally negative) or `0x`
/// hexadecimal.
///
/// Hexadecimal is accepted here and nowhere else in the converter.
pub fn parse_enum_value(text: &str) -> ConversionResult<i128> {
    let kind = DataKind::Enum;
    let value = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConversionError::invalid(kind, text, "invalid hexadecimal digits"));
        }
        if hex.trim_start_matches('0').len() > 16 {
            return Err(ConversionError::out_of_range(kind, text));
        }
        // At most 16 significant hex digits, so this fits u64.
        u64::from_str_radix(hex, 16)
            .map_err(|e| ConversionError::invalid(kind, text, e))? as i128
    } else {
        parse_decimal_digits(text, kind)?
    };

    if !(ENUM_MIN..=ENUM_MAX).contains(&value) {
        return Err(ConversionError::out_of_range(kind, text));
    }
    Ok(value)
}

fn parse_bool(text: &str) -> ConversionResult<Value> {
    if text.eq_ignore_ascii_case("true") {
        Ok(Value::Boolean(true))
    } else if text.eq_ignore_ascii_case("false") {
        Ok(Value::Boolean(false))
    } else {
        Err(ConversionError::invalid(
            DataKind::Boolean,
            text,
            "expected 'true' or 'false'",
        ))
    }
}

fn parse_char(text: &str) -> ConversionResult<Value> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Value::Char(c)),
        _ => Err(ConversionError::invalid(
            DataKind::Char,
            text,
            "expected exactly one character",
        )),
    }
}

fn parse_integer(text: &str, kind: DataKind) -> ConversionResult<Value> {
    let value = parse_decimal_digits(text, kind)?;
    integer_value(value, kind).ok_or_else(|| ConversionError::out_of_range(kind, text))
}

/// `-?[0-9]+`, widened to `i128`.
fn parse_decimal_digits(text: &str, kind: DataKind) -> ConversionResult<i128> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::invalid(kind, text, "expected decimal digits"));
    }
    text.parse::<i128>()
        .map_err(|_| ConversionError::out_of_range(kind, text))
}

fn parse_float(text: &str, kind: DataKind) -> ConversionResult<f64> {
    if let Some(special) = float_special(text) {
        return Ok(special);
    }
    check_float_syntax(text, kind)?;
    let value: f64 = text
        .parse()
        .map_err(|e| ConversionError::invalid(kind, text, e))?;
    if value.is_infinite() {
        return Err(ConversionError::out_of_range(kind, text));
    }
    Ok(value)
}

/// Invariant spellings of the non-finite values.
fn float_special(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Only digits, sign, point and exponent; rejects "inf", "nan" spellings.
fn check_float_syntax(text: &str, kind: DataKind) -> ConversionResult<()> {
    let allowed = |b: u8| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E');
    if text.is_empty() || !text.bytes().all(allowed) {
        return Err(ConversionError::invalid(kind, text, "expected a decimal number"));
    }
    Ok(())
}

fn parse_decimal(text: &str) -> ConversionResult<Value> {
    let kind = DataKind::Decimal;
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let well_formed = !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.map_or(true, |f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return Err(ConversionError::invalid(kind, text, "expected [-]digits[.digits]"));
    }
    // Syntax is valid, so any failure is a range or precision overflow.
    Decimal::from_str_exact(text)
        .map(Value::Decimal)
        .map_err(|_| ConversionError::out_of_range(kind, text))
}

fn parse_xml(text: &str) -> ConversionResult<Value> {
    let trimmed = text.trim();
    if !(trimmed.starts_with('<') && trimmed.ends_with('>')) {
        return Err(ConversionError::invalid(
            DataKind::Xml,
            text,
            "expected markup delimited by '<' and '>'",
        ));
    }
    Ok(Value::Xml(text.to_string()))
}
