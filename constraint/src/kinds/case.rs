//! UpperCase and LowerCase.

use ward_core::{ConfigResult, DataKind, ErrorId, Value};

use crate::params::{expect_count, reject_unknown_keys};
use crate::{Constraint, ValidationContext, ValidationResult};

const CASE_KINDS: &[DataKind] = &[DataKind::String, DataKind::Char];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Upper,
    Lower,
}

impl Case {
    /// True when `value` already equals its case mapping.
    fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Case::Upper, Value::String(s)) => s.to_uppercase() == *s,
            (Case::Lower, Value::String(s)) => s.to_lowercase() == *s,
            (Case::Upper, Value::Char(c)) => c.to_uppercase().eq([*c]),
            (Case::Lower, Value::Char(c)) => c.to_lowercase().eq([*c]),
            _ => true,
        }
    }
}

macro_rules! case_constraint {
    ($ty:ident, $name:literal, $case:expr, $id:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $ty;

        impl $ty {
            pub const NAME: &'static str = $name;

            pub fn new() -> Self {
                Self
            }
        }

        impl Constraint for $ty {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn allowed_kinds(&self) -> &'static [DataKind] {
                CASE_KINDS
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
                if !$case.matches(value) {
                    results.push(ctx.report($id, &[], self));
                }
            }

            fn export_state(&self) -> Vec<(String, String)> {
                Vec::new()
            }

            fn apply_state(
                &mut self,
                state: &[(String, String)],
                _kind: DataKind,
            ) -> ConfigResult<()> {
                reject_unknown_keys(Self::NAME, state, &[])
            }
        }
    };
}

case_constraint!(
    UpperCaseConstraint,
    "UpperCase",
    Case::Upper,
    ErrorId::NotUpperCase,
    "Fails when text differs from its upper-case mapping."
);

case_constraint!(
    LowerCaseConstraint,
    "LowerCase",
    Case::Lower,
    ErrorId::NotLowerCase,
    "Fails when text differs from its lower-case mapping."
);
