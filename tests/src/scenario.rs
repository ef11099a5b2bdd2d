//! Scenario definition and builder.

use std::sync::Arc;

use ward_core::{DataKind, ErrorId, Value};
use ward_enums::EnumCatalog;

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::ScenarioResult;
use crate::runner::Runner;

/// What a step validates.
#[derive(Debug, Clone)]
pub enum Input {
    /// Canonical text, converted with the scenario's kind.
    Text(String),
    /// An already typed value, possibly of another kind.
    Value(Value),
    Null,
}

/// A step in a scenario with its assertion.
#[derive(Debug)]
pub struct Step {
    pub name: String,
    pub input: Input,
    pub assertion: Assertion,
}

/// A complete test scenario: one notation string bound to one kind, and the
/// values validated against it.
pub struct Scenario {
    name: String,
    kind: DataKind,
    constraints: Option<String>,
    catalog: Option<Arc<EnumCatalog>>,
    member: Option<String>,
    display: Option<String>,
    steps: Vec<Step>,
    round_trip: bool,
    rejected_with: Option<ErrorId>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DataKind::String,
            constraints: None,
            catalog: None,
            member: None,
            display: None,
            steps: Vec::new(),
            round_trip: false,
            rejected_with: None,
        }
    }

    /// Set the data kind (default `String`).
    pub fn kind(mut self, kind: DataKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the constraint notation.
    pub fn constraints(mut self, notation: impl Into<String>) -> Self {
        self.constraints = Some(notation.into());
        self
    }

    /// Resolve `Type` constraints through this catalog.
    pub fn catalog(mut self, catalog: EnumCatalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Member name passed in the validation context.
    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Display name passed in the validation context.
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Also check that the canonical notation and the exported states
    /// rebuild an identical list.
    pub fn round_trip(mut self) -> Self {
        self.round_trip = true;
        self
    }

    /// Expect the notation itself to be rejected with `id`, either as the
    /// notation error or as its underlying cause.
    pub fn rejected_with(mut self, id: ErrorId) -> Self {
        self.rejected_with = Some(id);
        self
    }

    /// Add a step validating canonical text.
    pub fn step<F>(self, name: impl Into<String>, text: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.push_step(name.into(), Input::Text(text.into()), assertion_fn)
    }

    /// Add a step validating a typed value.
    pub fn value_step<F>(self, name: impl Into<String>, value: Value, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.push_step(name.into(), Input::Value(value), assertion_fn)
    }

    /// Add a step validating null.
    pub fn null_step<F>(self, name: impl Into<String>, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.push_step(name.into(), Input::Null, assertion_fn)
    }

    fn push_step<F>(mut self, name: String, input: Input, assertion_fn: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        let assertion = assertion_fn(AssertionBuilder::new()).build();
        self.steps.push(Step {
            name,
            input,
            assertion,
        });
        self
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        Runner::new(self).run()
    }

    // ==================== Accessors ====================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_kind(&self) -> DataKind {
        self.kind
    }

    pub fn notation(&self) -> Option<&str> {
        self.constraints.as_deref()
    }

    pub fn enum_catalog(&self) -> Option<&Arc<EnumCatalog>> {
        self.catalog.as_ref()
    }

    pub fn member_name(&self) -> Option<&str> {
        self.member.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn checks_round_trip(&self) -> bool {
        self.round_trip
    }

    pub fn expected_rejection(&self) -> Option<ErrorId> {
        self.rejected_with
    }
}
