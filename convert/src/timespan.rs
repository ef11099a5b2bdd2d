//! Invariant text form for durations: `[-][d.]hh:mm:ss[.fffffffff]`.
//!
//! The fraction carries up to nine digits (nanoseconds) with trailing zeros
//! trimmed, so every `TimeDelta` round-trips exactly.

use chrono::TimeDelta;
use ward_core::{ConversionError, ConversionResult, DataKind};

const SECONDS_PER_DAY: i64 = 86_400;

/// Render a duration in invariant form.
pub fn format_timespan(delta: TimeDelta) -> String {
    let negative = delta < TimeDelta::zero();
    let magnitude = if negative { -delta } else { delta };

    let total = magnitude.num_seconds();
    let nanos = magnitude.subsec_nanos();
    let days = total / SECONDS_PER_DAY;
    let hours = (total / 3600) % 24;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if days > 0 {
        out.push_str(&format!("{}.", days));
    }
    out.push_str(&format!("{:02}:{:02}:{:02}", hours, minutes, seconds));
    if nanos > 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

/// Parse the invariant duration form.
pub fn parse_timespan(text: &str) -> ConversionResult<TimeDelta> {
    let invalid = |reason: &str| ConversionError::invalid(DataKind::TimeSpan, text, reason);

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let first_colon = body
        .find(':')
        .ok_or_else(|| invalid("expected hh:mm:ss"))?;

    // A '.' before the first ':' separates the day count.
    let (days_text, clock) = match body[..first_colon].find('.') {
        Some(dot) => (Some(&body[..dot]), &body[dot + 1..]),
        None => (None, body),
    };
    let (hms, fraction) = match clock.find('.') {
        Some(dot) => (&clock[..dot], Some(&clock[dot + 1..])),
        None => (clock, None),
    };

    let days = match days_text {
        Some(d) => parse_digits(d, 19).ok_or_else(|| invalid("invalid day count"))?,
        None => 0,
    };

    let parts: Vec<&str> = hms.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid("expected hh:mm:ss"));
    }
    let hours = parse_digits(parts[0], 2).ok_or_else(|| invalid("invalid hours"))?;
    let minutes = parse_digits(parts[1], 2).ok_or_else(|| invalid("invalid minutes"))?;
    let seconds = parse_digits(parts[2], 2).ok_or_else(|| invalid("invalid seconds"))?;
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(invalid("clock component out of range"));
    }

    let nanos = match fraction {
        Some(f) if !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit()) => {
            let padded = format!("{:0<9}", f);
            padded
                .parse::<i64>()
                .map_err(|_| invalid("invalid fraction"))?
        }
        Some(_) => return Err(invalid("fraction must have 1 to 9 digits")),
        None => 0,
    };

    let out_of_range = || ConversionError::out_of_range(DataKind::TimeSpan, text);
    let total_seconds = days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|s| s.checked_add(hours * 3600 + minutes * 60 + seconds))
        .ok_or_else(out_of_range)?;
    let magnitude = TimeDelta::try_seconds(total_seconds)
        .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanos)))
        .ok_or_else(out_of_range)?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse 1 to `max_len` ASCII digits.
fn parse_digits(text: &str, max_len: usize) -> Option<i64> {
    if text.is_empty() || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
