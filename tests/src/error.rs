//! Error types for the scenario framework.

use thiserror::Error;
use ward_core::{ConfigError, ConversionError};

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario has no notation.
    #[error("constraints not specified for scenario '{scenario}'")]
    MissingConstraints { scenario: String },

    /// The notation was rejected when it was expected to parse.
    #[error("scenario '{scenario}' failed to configure: {source}")]
    Configuration {
        scenario: String,
        source: ConfigError,
    },

    /// A step's input is not valid text for the scenario's kind.
    #[error("step '{step}' input is not convertible: {source}")]
    Conversion {
        step: String,
        source: ConversionError,
    },

    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    /// Canonical notation or exported state did not reproduce the list.
    #[error("round trip failed for scenario '{scenario}': {message}")]
    RoundTrip { scenario: String, message: String },
}

impl ScenarioError {
    pub fn missing_constraints(scenario: impl Into<String>) -> Self {
        Self::MissingConstraints {
            scenario: scenario.into(),
        }
    }

    pub fn configuration(scenario: impl Into<String>, source: ConfigError) -> Self {
        Self::Configuration {
            scenario: scenario.into(),
            source,
        }
    }

    pub fn conversion(step: impl Into<String>, source: ConversionError) -> Self {
        Self::Conversion {
            step: step.into(),
            source,
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn round_trip(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RoundTrip {
            scenario: scenario.into(),
            message: message.into(),
        }
    }
}
