//! Configuration and conversion error types.
//!
//! Configuration errors are caller faults raised at construction,
//! `set_parameters` or parse time (and for precondition violations at
//! validation time). Data that merely fails a constraint is reported as a
//! validation result instead, never through these types.

use crate::{DataKind, ErrorId};
use thiserror::Error;

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for constraint configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when text cannot be converted to or from a typed value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Data kind None cannot be converted")]
    NoneKind,

    #[error("Cannot convert '{text}' to {kind}: {reason}")]
    Invalid {
        kind: DataKind,
        text: String,
        reason: String,
    },

    #[error("'{text}' is outside the range of {kind}")]
    OutOfRange { kind: DataKind, text: String },

    #[error("Expected a {expected} value, got {actual}")]
    KindMismatch {
        expected: DataKind,
        actual: &'static str,
    },
}

impl ConversionError {
    pub fn invalid(kind: DataKind, text: impl Into<String>, reason: impl ToString) -> Self {
        Self::Invalid {
            kind,
            text: text.into(),
            reason: reason.to_string(),
        }
    }

    pub fn out_of_range(kind: DataKind, text: impl Into<String>) -> Self {
        Self::OutOfRange {
            kind,
            text: text.into(),
        }
    }

    pub fn kind_mismatch(expected: DataKind, actual: &'static str) -> Self {
        Self::KindMismatch { expected, actual }
    }
}

/// Errors raised while configuring or invoking a constraint incorrectly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{constraint}: data kind None is not a valid data kind")]
    NoneKind { constraint: String },

    #[error("Argument '{name}' must not be null")]
    NullArgument { name: String },

    #[error("Argument '{name}' must not be empty")]
    EmptyArgument { name: String },

    #[error("Argument '{name}' value '{value}' is out of range: {reason}")]
    OutOfRange {
        name: String,
        value: String,
        reason: String,
    },

    #[error("{constraint}: expected at least {expected} parameter(s), got {actual}")]
    TooFewParameters {
        constraint: String,
        expected: usize,
        actual: usize,
    },

    #[error("{constraint}: expected at most {expected} parameter(s), got {actual}")]
    TooManyParameters {
        constraint: String,
        expected: usize,
        actual: usize,
    },

    #[error("{constraint}: parameter {index} ('{raw}') is malformed: {source}")]
    MalformedParameter {
        constraint: String,
        index: usize,
        raw: String,
        #[source]
        source: ConversionError,
    },

    #[error("{constraint}: invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        constraint: String,
        pattern: String,
        message: String,
    },

    #[error("Unknown constraint: {name}")]
    UnknownConstraint { name: String },

    #[error("{constraint}: data kind {kind} is not allowed")]
    DisallowedKind { constraint: String, kind: DataKind },

    #[error("{constraint}: value must not be null")]
    NullValue { constraint: String },

    #[error("{constraint}: expected a {expected} value, got {actual}")]
    ValueKindMismatch {
        constraint: String,
        expected: DataKind,
        actual: &'static str,
    },

    #[error("{constraint}: unknown state key '{key}'")]
    UnknownStateKey { constraint: String, key: String },

    #[error("{message} at offset {offset}: '{fragment}'")]
    Notation {
        message: String,
        fragment: String,
        offset: usize,
        #[source]
        source: Option<Box<ConfigError>>,
    },
}

impl ConfigError {
    pub fn none_kind(constraint: impl Into<String>) -> Self {
        Self::NoneKind {
            constraint: constraint.into(),
        }
    }

    pub fn null_argument(name: impl Into<String>) -> Self {
        Self::NullArgument { name: name.into() }
    }

    pub fn empty_argument(name: impl Into<String>) -> Self {
        Self::EmptyArgument { name: name.into() }
    }

    pub fn out_of_range(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn too_few_parameters(constraint: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::TooFewParameters {
            constraint: constraint.into(),
            expected,
            actual,
        }
    }

    pub fn too_many_parameters(constraint: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::TooManyParameters {
            constraint: constraint.into(),
            expected,
            actual,
        }
    }

    pub fn malformed_parameter(
        constraint: impl Into<String>,
        index: usize,
        raw: impl Into<String>,
        source: ConversionError,
    ) -> Self {
        Self::MalformedParameter {
            constraint: constraint.into(),
            index,
            raw: raw.into(),
            source,
        }
    }

    pub fn invalid_pattern(
        constraint: impl Into<String>,
        pattern: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::InvalidPattern {
            constraint: constraint.into(),
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    pub fn unknown_constraint(name: impl Into<String>) -> Self {
        Self::UnknownConstraint { name: name.into() }
    }

    pub fn disallowed_kind(constraint: impl Into<String>, kind: DataKind) -> Self {
        Self::DisallowedKind {
            constraint: constraint.into(),
            kind,
        }
    }

    pub fn null_value(constraint: impl Into<String>) -> Self {
        Self::NullValue {
            constraint: constraint.into(),
        }
    }

    pub fn value_kind_mismatch(
        constraint: impl Into<String>,
        expected: DataKind,
        actual: &'static str,
    ) -> Self {
        Self::ValueKindMismatch {
            constraint: constraint.into(),
            expected,
            actual,
        }
    }

    pub fn unknown_state_key(constraint: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownStateKey {
            constraint: constraint.into(),
            key: key.into(),
        }
    }

    /// The symbolic identifier of this failure site.
    pub fn id(&self) -> ErrorId {
        match self {
            ConfigError::NoneKind { .. } => ErrorId::NoneKind,
            ConfigError::NullArgument { .. } => ErrorId::NullArgument,
            ConfigError::EmptyArgument { .. } => ErrorId::EmptyArgument,
            ConfigError::OutOfRange { .. } => ErrorId::ArgumentOutOfRange,
            ConfigError::TooFewParameters { .. } => ErrorId::TooFewParameters,
            ConfigError::TooManyParameters { .. } => ErrorId::TooManyParameters,
            ConfigError::MalformedParameter { .. } => ErrorId::MalformedParameter,
            ConfigError::InvalidPattern { .. } => ErrorId::InvalidPattern,
            ConfigError::UnknownConstraint { .. } => ErrorId::UnknownConstraint,
            ConfigError::DisallowedKind { .. } => ErrorId::DisallowedKind,
            ConfigError::NullValue { .. } => ErrorId::NullValue,
            ConfigError::ValueKindMismatch { .. } => ErrorId::ValueKindMismatch,
            ConfigError::UnknownStateKey { .. } => ErrorId::UnknownStateKey,
            ConfigError::Notation { .. } => ErrorId::NotationSyntax,
        }
    }

    /// The stable numeric code of this failure site.
    pub fn code(&self) -> u32 {
        self.id().code()
    }
}
