//! Notation error types.

use crate::Span;
use std::fmt;
use ward_core::ConfigError;

/// A notation error with location information and the offending text.
#[derive(Debug, Clone, PartialEq)]
pub struct NotationError {
    pub message: String,
    pub span: Span,
    /// The offending raw substring: the whole `[...]` group once one has
    /// been opened.
    pub fragment: String,
    /// The configuration error behind this one, for registry and parameter
    /// failures.
    pub source: Option<ConfigError>,
}

impl NotationError {
    pub fn new(message: impl Into<String>, span: Span, fragment: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            fragment: fragment.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: ConfigError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn unexpected_eof(span: Span, expected: &str, fragment: impl Into<String>) -> Self {
        Self::new(
            format!("unexpected end of input, expected {}", expected),
            span,
            fragment,
        )
    }

    pub fn unexpected(span: Span, expected: &str, found: &str, fragment: impl Into<String>) -> Self {
        Self::new(
            format!("expected {}, found {}", expected, found),
            span,
            fragment,
        )
    }

    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Notation error at line {}, column {}: {} in '{}'",
            self.span.line, self.span.column, self.message, self.fragment
        )
    }
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<NotationError> for ConfigError {
    fn from(error: NotationError) -> Self {
        ConfigError::Notation {
            message: error.message,
            fragment: error.fragment,
            offset: error.span.start,
            source: error.source.map(Box::new),
        }
    }
}

/// Result type for notation operations.
pub type NotationResult<T> = Result<T, NotationError>;
