//! Range: inclusive bounds in the data kind's own ordering.

use std::cmp::Ordering;

use ward_core::{ConfigError, ConfigResult, DataKind, ErrorId, Value};

use crate::params::{entry, expect_count, parse_param, reject_unknown_keys, state_value};
use crate::{Constraint, ValidationContext, ValidationResult};

const RANGE_KINDS: &[DataKind] = &[
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
    DataKind::Char,
    DataKind::DateTimeOffset,
    DataKind::TimeSpan,
    DataKind::Version,
];

/// One bound: the typed value and its canonical text.
#[derive(Debug, Clone, PartialEq)]
struct Bound {
    value: Value,
    text: String,
}

/// Fails when a value lies outside `[min, max]`. NaN is never in range.
///
/// Bounds are typed values of the kind they were configured for; validating
/// under any other kind is a configuration error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeConstraint {
    kind: Option<DataKind>,
    bounds: Option<(Bound, Bound)>,
}

impl RangeConstraint {
    pub const NAME: &'static str = "Range";

    pub fn new() -> Self {
        Self::default()
    }

    /// Create from typed bounds of the same kind.
    pub fn between(min: Value, max: Value) -> ConfigResult<Self> {
        let kind = min
            .kind()
            .ok_or_else(|| ConfigError::null_argument("min"))?;
        let mut range = Self::new();
        range.assert_data_kind(kind)?;
        range.bounds = Some(Self::check_bounds(kind, min, max)?);
        range.kind = Some(kind);
        Ok(range)
    }

    pub fn min(&self) -> Option<&Value> {
        self.bounds.as_ref().map(|(min, _)| &min.value)
    }

    pub fn max(&self) -> Option<&Value> {
        self.bounds.as_ref().map(|(_, max)| &max.value)
    }

    fn check_bounds(kind: DataKind, min: Value, max: Value) -> ConfigResult<(Bound, Bound)> {
        let min = Self::bound(kind, min, 0)?;
        let max = Self::bound(kind, max, 1)?;
        match min.value.compare(&max.value) {
            Some(Ordering::Less | Ordering::Equal) => Ok((min, max)),
            Some(Ordering::Greater) => Err(ConfigError::out_of_range(
                "min",
                &min.text,
                format!("must not exceed max ({})", max.text),
            )),
            None => Err(ConfigError::out_of_range(
                "min",
                &min.text,
                format!("is not comparable with max ({})", max.text),
            )),
        }
    }

    fn bound(kind: DataKind, value: Value, index: usize) -> ConfigResult<Bound> {
        let text = ward_convert::format(&value, kind).map_err(|e| {
            let raw = format!("{:?}", value);
            ConfigError::malformed_parameter(Self::NAME, index, raw, e)
        })?;
        Ok(Bound { value, text })
    }

    fn parse_bounds(&mut self, min: &str, max: &str, kind: DataKind) -> ConfigResult<()> {
        let raw = [min.to_string(), max.to_string()];
        let min = parse_param(Self::NAME, &raw, 0, kind)?;
        let max = parse_param(Self::NAME, &raw, 1, kind)?;
        self.bounds = Some(Self::check_bounds(kind, min, max)?);
        self.kind = Some(kind);
        Ok(())
    }
}

impl Constraint for RangeConstraint {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn allowed_kinds(&self) -> &'static [DataKind] {
        RANGE_KINDS
    }

    fn configured_kind(&self) -> Option<DataKind> {
        self.kind
    }

    fn get_parameters(&self, out: &mut Vec<String>) {
        if let Some((min, max)) = &self.bounds {
            out.push(min.text.clone());
            out.push(max.text.clone());
        }
    }

    fn apply_parameters(&mut self, params: &[String], kind: DataKind) -> ConfigResult<()> {
        expect_count(Self::NAME, params, 2, 2)?;
        self.parse_bounds(&params[0], &params[1], kind)
    }

    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) {
        let Some((min, max)) = &self.bounds else {
            return;
        };
        let above_min = matches!(
            value.compare(&min.value),
            Some(Ordering::Greater | Ordering::Equal)
        );
        let below_max = matches!(
            value.compare(&max.value),
            Some(Ordering::Less | Ordering::Equal)
        );
        if !(above_min && below_max) {
            results.push(ctx.report(ErrorId::OutOfRange, &[&min.text, &max.text], self));
        }
    }

    fn export_state(&self) -> Vec<(String, String)> {
        match &self.bounds {
            Some((min, max)) => vec![entry("min", &min.text), entry("max", &max.text)],
            None => Vec::new(),
        }
    }

    fn apply_state(&mut self, state: &[(String, String)], kind: DataKind) -> ConfigResult<()> {
        reject_unknown_keys(Self::NAME, state, &["min", "max"])?;
        let min = state_value(state, "min")?;
        let max = state_value(state, "max")?;
        self.parse_bounds(min, max, kind)
    }
}
