//! The validation orchestrator.

use ward_constraint::{Constraint, ValidationContext, ValidationResult};
use ward_core::{ConfigError, ConfigResult, DataKind, ErrorId, Value};
use ward_notation::{parse, serialize};
use ward_registry::{ConstraintState, Registry};

/// An ordered constraint list bound to one data kind.
///
/// Every constraint in the list has accepted the kind. Validation never
/// short-circuits between constraints: results are concatenated in list
/// order. A null value is the one exception, see [`Validator::validate_with`].
#[derive(Debug)]
pub struct Validator {
    kind: DataKind,
    constraints: Vec<Box<dyn Constraint>>,
}

impl Validator {
    /// An empty list for `kind`.
    pub fn new(kind: DataKind) -> Self {
        Self {
            kind,
            constraints: Vec::new(),
        }
    }

    /// Parse `text` and configure every constraint for `kind`.
    pub fn from_notation(text: &str, kind: DataKind, registry: &Registry) -> ConfigResult<Self> {
        let constraints = parse(text, kind, registry)?;
        Ok(Self { kind, constraints })
    }

    /// Rebuild from exported states. Every state must carry this kind.
    pub fn from_states(
        kind: DataKind,
        states: &[ConstraintState],
        registry: &Registry,
    ) -> ConfigResult<Self> {
        let mut validator = Self::new(kind);
        for state in states {
            if state.data_kind != kind {
                return Err(ConfigError::value_kind_mismatch(
                    &state.name,
                    kind,
                    state.data_kind.name(),
                ));
            }
            let constraint = state.restore(registry)?;
            validator.push(constraint)?;
        }
        Ok(validator)
    }

    /// Append a configured constraint. Its typed parameters, if any, must
    /// have been parsed for this list's kind.
    pub fn push(&mut self, constraint: Box<dyn Constraint>) -> ConfigResult<()> {
        constraint.assert_data_kind(self.kind)?;
        constraint.assert_configured_kind(self.kind)?;
        self.constraints.push(constraint);
        Ok(())
    }

    /// Builder form of `push`.
    pub fn with(mut self, constraint: impl Constraint + 'static) -> ConfigResult<Self> {
        self.push(Box::new(constraint))?;
        Ok(self)
    }

    pub fn kind(&self) -> DataKind {
        self.kind
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Canonical notation for the whole list.
    pub fn to_notation(&self) -> String {
        serialize(&self.constraints)
    }

    /// Exported state of every constraint, in order.
    pub fn states(&self) -> Vec<ConstraintState> {
        self.constraints
            .iter()
            .map(|c| ConstraintState::capture(c.as_ref(), self.kind))
            .collect()
    }

    // ==================== VALIDATION ====================

    /// Validate with a default context for this kind.
    pub fn validate(&self, value: &Value) -> ConfigResult<Vec<ValidationResult<'_>>> {
        self.validate_with(value, &ValidationContext::new(self.kind))
    }

    /// Validate with the caller's member name, display name and messages.
    /// The context's kind is replaced by this list's kind.
    ///
    /// A null value runs only the constraints that tolerate null. When none
    /// does, the list reports a single `ValueRequired` result of its own.
    pub fn validate_with(
        &self,
        value: &Value,
        ctx: &ValidationContext<'_>,
    ) -> ConfigResult<Vec<ValidationResult<'_>>> {
        let ctx = ValidationContext {
            kind: self.kind,
            ..*ctx
        };
        let mut results = Vec::new();

        let null = value.is_null();
        let tolerant = self.constraints.iter().any(|c| c.tolerates_null());
        if null && !tolerant && !self.constraints.is_empty() {
            tracing::warn!(
                kind = %self.kind,
                member = ctx.member_name.unwrap_or_default(),
                "null value with no null-tolerant constraint"
            );
            let message = ctx.message(ErrorId::ValueRequired, &[]);
            results.push(
                ValidationResult::new(ErrorId::ValueRequired, message).with_member(ctx.member_name),
            );
            return Ok(results);
        }

        for constraint in &self.constraints {
            if null && !constraint.tolerates_null() {
                continue;
            }
            let found = constraint.validate(value, &ctx)?;
            tracing::trace!(
                constraint = constraint.name(),
                failures = found.len(),
                "constraint ran"
            );
            results.extend(found);
        }

        Ok(results)
    }

    /// Whether `value` passes every constraint.
    pub fn is_valid(&self, value: &Value) -> ConfigResult<bool> {
        Ok(self.validate(value)?.is_empty())
    }
}
