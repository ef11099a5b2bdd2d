//! MinLength and MaxLength.

use ward_core::{ConfigResult, DataKind, ErrorId, Value};

use super::LENGTH_KINDS;
use crate::params::{entry, expect_count, parse_length, reject_unknown_keys, state_value};
use crate::{Constraint, ValidationContext, ValidationResult};

/// The length bound shared by both length constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LengthBound(i32);

impl LengthBound {
    fn get_parameters(&self, out: &mut Vec<String>) {
        out.push(self.0.to_string());
    }

    fn export_state(&self) -> Vec<(String, String)> {
        vec![entry("length", self.0)]
    }

    fn import_state(constraint: &str, state: &[(String, String)]) -> ConfigResult<Self> {
        reject_unknown_keys(constraint, state, &["length"])?;
        let raw = state_value(state, "length")?;
        parse_length(constraint, raw, 0).map(Self)
    }

    fn as_len(self) -> usize {
        self.0 as usize
    }
}

// ==================== MinLength ====================

/// Fails when a value is shorter than the bound.
///
/// Text is measured in Unicode scalar values, byte arrays in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLengthConstraint {
    bound: LengthBound,
}

impl MinLengthConstraint {
    pub const NAME: &'static str = "MinLength";

    /// Create with a bound. Negative bounds are clamped to zero.
    pub fn new(min: i32) -> Self {
        Self {
            bound: LengthBound(min.max(0)),
        }
    }

    pub fn min(&self) -> i32 {
        self.bound.0
    }
}

impl Default for MinLengthConstraint {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Constraint for MinLengthConstraint {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn allowed_kinds(&self) -> &'static [DataKind] {
        LENGTH_KINDS
    }

    fn get_parameters(&self, out: &mut Vec<String>) {
        self.bound.get_parameters(out);
    }

    fn apply_parameters(&mut self, params: &[String], _kind: DataKind) -> ConfigResult<()> {
        expect_count(Self::NAME, params, 1, 1)?;
        self.bound = LengthBound(parse_length(Self::NAME, &params[0], 0)?);
        Ok(())
    }

    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) {
        if let Some(len) = value.measured_len() {
            if len < self.bound.as_len() {
                results.push(ctx.report(ErrorId::TooShort, &[&self.bound.0], self));
            }
        }
    }

    fn export_state(&self) -> Vec<(String, String)> {
        self.bound.export_state()
    }

    fn apply_state(&mut self, state: &[(String, String)], _kind: DataKind) -> ConfigResult<()> {
        self.bound = LengthBound::import_state(Self::NAME, state)?;
        Ok(())
    }
}

// ==================== MaxLength ====================

/// Fails when a value is longer than the bound. The default bound admits
/// any length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLengthConstraint {
    bound: LengthBound,
}

impl MaxLengthConstraint {
    pub const NAME: &'static str = "MaxLength";

    pub fn new(max: i32) -> Self {
        Self {
            bound: LengthBound(max.max(0)),
        }
    }

    pub fn max(&self) -> i32 {
        self.bound.0
    }
}

impl Default for MaxLengthConstraint {
    fn default() -> Self {
        Self::new(i32::MAX)
    }
}

impl Constraint for MaxLengthConstraint {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn allowed_kinds(&self) -> &'static [DataKind] {
        LENGTH_KINDS
    }

    fn get_parameters(&self, out: &mut Vec<String>) {
        self.bound.get_parameters(out);
    }

    fn apply_parameters(&mut self, params: &[String], _kind: DataKind) -> ConfigResult<()> {
        expect_count(Self::NAME, params, 0, 1)?;
        self.bound = match params.first() {
            Some(raw) => LengthBound(parse_length(Self::NAME, raw, 0)?),
            None => LengthBound(i32::MAX),
        };
        Ok(())
    }

    fn on_validation<'c>(
        &'c self,
        results: &mut Vec<ValidationResult<'c>>,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) {
        if let Some(len) = value.measured_len() {
            if len > self.bound.as_len() {
                results.push(ctx.report(ErrorId::TooLong, &[&self.bound.0], self));
            }
        }
    }

    fn export_state(&self) -> Vec<(String, String)> {
        self.bound.export_state()
    }

    fn apply_state(&mut self, state: &[(String, String)], _kind: DataKind) -> ConfigResult<()> {
        self.bound = LengthBound::import_state(Self::NAME, state)?;
        Ok(())
    }
}
