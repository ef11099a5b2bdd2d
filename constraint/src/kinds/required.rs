//! Required: the one built-in that accepts null.

use ward_core::{ConfigResult, DataKind, ErrorId, Value};

use crate::params::{expect_count, reject_unknown_keys};
use crate::{Constraint, ValidationContext, ValidationResult};

const REQUIRED_KINDS: &[DataKind] = &[
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

/// Fails for null, empty text and empty byte arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredConstraint;

impl RequiredConstraint {
    pub const NAME: &'static str = "Required";

    pub fn new() -> Self {
        Self
    }
}

impl Constraint for RequiredConstraint {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn allowed_kinds(&self) -> &'static [DataKind] {
        REQUIRED_KINDS
    }

    fn tolerates_null(&self) -> bool {
        true
    }

    fn get_parameters(&self, _out: &mut Vec<String>) {}

    fn apply_parameters(&mut self, params: &[String], _kind: DataKind) -> ConfigResult<()> {
        expect_count(Self::NAME, params, 0, 0)
    }

    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) {
        let missing = match value {
            Value::Null => true,
            Value::String(s) | Value::Xml(s) => s.is_empty(),
            Value::ByteArray(b) => b.is_empty(),
            _ => false,
        };
        if missing {
            results.push(ctx.report(ErrorId::ValueRequired, &[], self));
        }
    }

    fn export_state(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn apply_state(&mut self, state: &[(String, String)], _kind: DataKind) -> ConfigResult<()> {
        reject_unknown_keys(Self::NAME, state, &[])
    }
}
