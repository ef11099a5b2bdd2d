//! Scenario runner.

use std::sync::Arc;

use ward_constraint::ValidationContext;
use ward_core::{ConfigError, ErrorId, Value};
use ward_enums::TypeResolver;
use ward_registry::{ConstraintState, Registry};
use ward_validator::Validator;

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::{Input, Scenario};

/// Runs a scenario against Ward.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    registry: Registry,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario.
    pub fn new(scenario: &'s Scenario) -> Self {
        let registry = match scenario.enum_catalog() {
            Some(catalog) => {
                let resolver: Arc<dyn TypeResolver> = catalog.clone();
                Registry::with_resolver(resolver)
            }
            None => Registry::standard(),
        };
        Self { scenario, registry }
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        let name = self.scenario.name();
        let kind = self.scenario.data_kind();
        let notation = self
            .scenario
            .notation()
            .ok_or_else(|| ScenarioError::missing_constraints(name))?;

        // 1. Parse the notation
        let parsed = Validator::from_notation(notation, kind, &self.registry);
        let validator = match (parsed, self.scenario.expected_rejection()) {
            (Err(e), Some(expected)) if rejection_matches(&e, expected) => return Ok(()),
            (Err(e), _) => return Err(ScenarioError::configuration(name, e)),
            (Ok(_), Some(expected)) => {
                return Err(ScenarioError::assertion_failed(
                    notation,
                    format!("expected the notation to be rejected with {:?}", expected),
                ))
            }
            (Ok(validator), None) => validator,
        };

        // 2. Round trip through canonical notation and exported state
        if self.scenario.checks_round_trip() {
            self.check_round_trip(&validator)?;
        }

        // 3. Validate each step and verify assertions
        let mut ctx = ValidationContext::new(kind);
        if let Some(member) = self.scenario.member_name() {
            ctx = ctx.with_member(member);
        }
        if let Some(display) = self.scenario.display_name() {
            ctx = ctx.with_display_name(display);
        }

        for step in self.scenario.steps() {
            let value = match &step.input {
                Input::Text(text) => ward_convert::parse(text, kind)
                    .map_err(|e| ScenarioError::conversion(&step.name, e))?,
                Input::Value(value) => value.clone(),
                Input::Null => Value::Null,
            };
            let result = validator.validate_with(&value, &ctx);
            step.assertion.verify(&step.name, &result)?;
        }

        Ok(())
    }

    fn check_round_trip(&self, validator: &Validator) -> ScenarioResult<()> {
        let name = self.scenario.name();
        let kind = validator.kind();
        let canonical = validator.to_notation();

        let reparsed = Validator::from_notation(&canonical, kind, &self.registry)
            .map_err(|e| ScenarioError::round_trip(name, format!("'{}': {}", canonical, e)))?;
        for (a, b) in validator.constraints().iter().zip(reparsed.constraints()) {
            if a.name() != b.name() || a.parameters() != b.parameters() {
                return Err(ScenarioError::round_trip(
                    name,
                    format!(
                        "{} {:?} became {} {:?}",
                        a.name(),
                        a.parameters(),
                        b.name(),
                        b.parameters()
                    ),
                ));
            }
        }
        if reparsed.to_notation() != canonical {
            return Err(ScenarioError::round_trip(
                name,
                format!("'{}' reserialized as '{}'", canonical, reparsed.to_notation()),
            ));
        }

        let json = serde_json::to_string(&validator.states())
            .map_err(|e| ScenarioError::round_trip(name, e.to_string()))?;
        let states: Vec<ConstraintState> = serde_json::from_str(&json)
            .map_err(|e| ScenarioError::round_trip(name, e.to_string()))?;
        let restored = Validator::from_states(kind, &states, &self.registry)
            .map_err(|e| ScenarioError::round_trip(name, e.to_string()))?;
        if restored.to_notation() != canonical {
            return Err(ScenarioError::round_trip(
                name,
                format!("state restored as '{}'", restored.to_notation()),
            ));
        }

        Ok(())
    }
}

fn rejection_matches(error: &ConfigError, expected: ErrorId) -> bool {
    if error.id() == expected {
        return true;
    }
    matches!(error, ConfigError::Notation { source: Some(source), .. } if source.id() == expected)
}
