//! Validation result types.

use std::fmt;

use ward_core::ErrorId;

use crate::Constraint;

/// One reported data-validation failure.
///
/// Results are plain data: they are returned, never raised. The
/// `constraint` back-reference borrows the constraint that produced the
/// result and is `None` for results the orchestrator emits itself.
#[derive(Debug, Clone)]
pub struct ValidationResult<'c> {
    /// Symbolic identifier of the failure.
    pub id: ErrorId,
    /// Stable numeric code for `id`.
    pub code: u32,
    /// Rendered message.
    pub message: String,
    /// Name of the validated member, when the caller supplied one.
    pub member_name: Option<String>,
    /// The constraint that produced this result.
    pub constraint: Option<&'c dyn Constraint>,
}

impl<'c> ValidationResult<'c> {
    /// Create a new result.
    pub fn new(id: ErrorId, message: impl Into<String>) -> Self {
        Self {
            id,
            code: id.code(),
            message: message.into(),
            member_name: None,
            constraint: None,
        }
    }

    /// Attach the validated member's name.
    pub fn with_member(mut self, member_name: Option<&str>) -> Self {
        self.member_name = member_name.map(str::to_string);
        self
    }

    /// Attach the producing constraint.
    pub fn with_constraint(mut self, constraint: &'c dyn Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    /// Name of the producing constraint, if any.
    pub fn constraint_name(&self) -> Option<&'static str> {
        self.constraint.map(|c| c.name())
    }
}

impl fmt::Display for ValidationResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:08X}] {}", self.code, self.message)
    }
}
