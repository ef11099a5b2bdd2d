//! Shared parameter and state helpers.

use ward_core::{ConfigError, ConfigResult, DataKind, Value};

/// Fail unless `min <= params.len() <= max`.
pub(crate) fn expect_count(
    constraint: &str,
    params: &[String],
    min: usize,
    max: usize,
) -> ConfigResult<()> {
    if params.len() < min {
        return Err(ConfigError::too_few_parameters(constraint, min, params.len()));
    }
    if params.len() > max {
        return Err(ConfigError::too_many_parameters(constraint, max, params.len()));
    }
    Ok(())
}

/// Convert parameter `index` to a value of `kind`.
pub(crate) fn parse_param(
    constraint: &str,
    params: &[String],
    index: usize,
    kind: DataKind,
) -> ConfigResult<Value> {
    let raw = &params[index];
    ward_convert::parse(raw, kind)
        .map_err(|e| ConfigError::malformed_parameter(constraint, index, raw.as_str(), e))
}

/// Parse a non-negative 32-bit length.
pub(crate) fn parse_length(constraint: &str, raw: &str, index: usize) -> ConfigResult<i32> {
    let value = ward_convert::parse(raw, DataKind::Int32)
        .map_err(|e| ConfigError::malformed_parameter(constraint, index, raw, e))?;
    match value {
        Value::Int32(n) if n >= 0 => Ok(n),
        _ => Err(ConfigError::out_of_range(
            "length",
            raw,
            "must be between 0 and 2147483647",
        )),
    }
}

/// Look up a required state entry.
pub(crate) fn state_value<'s>(state: &'s [(String, String)], key: &str) -> ConfigResult<&'s str> {
    state
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .ok_or_else(|| ConfigError::null_argument(key))
}

/// Fail on the first key outside `known`.
pub(crate) fn reject_unknown_keys(
    constraint: &str,
    state: &[(String, String)],
    known: &[&str],
) -> ConfigResult<()> {
    match state.iter().find(|(k, _)| !known.contains(&k.as_str())) {
        Some((key, _)) => Err(ConfigError::unknown_state_key(constraint, key.as_str())),
        None => Ok(()),
    }
}

pub(crate) fn entry(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}
